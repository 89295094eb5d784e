use async_trait::async_trait;

use crate::config::KernelConfig;
use crate::container::{Container, ContainerBuilder};
use crate::kernel::error::Result;

/// A unit of wiring registered with the [`Kernel`](crate::kernel::Kernel).
///
/// `build` contributes definitions and compiler passes before compile;
/// `boot` and `shutdown` bracket the lifetime of the compiled container.
#[async_trait]
pub trait Bundle: Send + Sync {
    fn name(&self) -> &'static str;

    fn build(&self, container: &mut ContainerBuilder, config: &KernelConfig) -> Result<()>;

    async fn boot(&self, _container: &Container) -> Result<()> {
        Ok(())
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }
}
