use crate::compiler::QueryExtensionPass;
use crate::config::KernelConfig;
use crate::container::ContainerBuilder;
use crate::kernel::{Bundle, Result};

/// Core API wiring. Queues the query extension pass.
#[derive(Debug, Default)]
pub struct ApiBundle;

impl Bundle for ApiBundle {
    fn name(&self) -> &'static str {
        "api"
    }

    fn build(&self, container: &mut ContainerBuilder, _config: &KernelConfig) -> Result<()> {
        container.add_compiler_pass(Box::new(QueryExtensionPass::new()), 0);
        Ok(())
    }
}
