use crate::compiler::CompilerPass;
use crate::container::{ContainerBuilder, ContainerError, Result};

/// Rejects arguments that reference services missing from the container.
#[derive(Debug, Default, Clone, Copy)]
pub struct CheckReferencesPass;

impl CompilerPass for CheckReferencesPass {
    fn name(&self) -> &'static str {
        "check_references"
    }

    fn process(&self, container: &mut ContainerBuilder) -> Result<()> {
        for id in container.service_ids() {
            let definition = container.get_definition(id)?;
            for (_, argument) in definition.arguments() {
                if let Some(dangling) = argument.references().find(|r| !container.has_definition(r.id())) {
                    return Err(ContainerError::InvalidReference {
                        from: id.clone(),
                        to: dangling.id().to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}
