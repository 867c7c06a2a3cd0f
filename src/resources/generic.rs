//! Resource driven entirely by an endpoint descriptor

use super::context::{body, EntityStream, ResourceContext};
use super::endpoint::EndpointDescriptor;
use crate::error::{Error, Result};
use crate::models::FromRaw;
use crate::types::ListParams;
use futures::TryStreamExt;
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

/// `list`/`get` over one remote collection, mapping into `T`
pub struct GenericResource<T> {
    descriptor: EndpointDescriptor,
    ctx: ResourceContext,
    _model: PhantomData<fn() -> T>,
}

impl<T> GenericResource<T>
where
    T: FromRaw + Send + 'static,
{
    pub fn new(descriptor: EndpointDescriptor, ctx: ResourceContext) -> Self {
        Self {
            descriptor,
            ctx,
            _model: PhantomData,
        }
    }

    pub fn descriptor(&self) -> &EndpointDescriptor {
        &self.descriptor
    }

    /// Lazily page through the collection
    pub fn stream(&self, params: &ListParams) -> EntityStream<T> {
        self.ctx.stream(
            &self.descriptor.list_endpoint(),
            params.to_body(),
            params.page_size,
        )
    }

    /// Every entity in the collection
    pub async fn list(&self, params: &ListParams) -> Result<Vec<T>> {
        self.stream(params).try_collect().await
    }

    /// Fetch one entity.
    ///
    /// Fails with `UnsupportedOperation` on list-only collections without
    /// touching the network.
    pub async fn get(&self, id: &str) -> Result<T> {
        if !self.descriptor.supports_get {
            return Err(Error::unsupported(self.descriptor.name, "get"));
        }
        let id_param = self.descriptor.id_param();
        self.ctx
            .fetch_one(
                &self.descriptor.info_endpoint(),
                &body([(id_param.as_str(), Value::from(id))]),
            )
            .await
    }
}

impl<T> Clone for GenericResource<T> {
    fn clone(&self) -> Self {
        Self {
            descriptor: self.descriptor,
            ctx: self.ctx.clone(),
            _model: PhantomData,
        }
    }
}

impl<T> fmt::Debug for GenericResource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenericResource")
            .field("endpoint", &self.descriptor.name)
            .field("supports_get", &self.descriptor.supports_get)
            .finish()
    }
}
