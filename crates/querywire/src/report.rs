use std::fmt;

use querywire_core::compiler::query_extension::ExtensionBinding;
use querywire_core::{Container, DataDriver, Reference};

/// Extension chains injected into the active driver's data providers.
#[derive(Debug)]
pub struct WiringReport {
    pub environment: String,
    pub driver: Option<DataDriver>,
    pub bindings: Vec<(ExtensionBinding, Vec<Reference>)>,
}

impl WiringReport {
    pub fn from_container(environment: &str, container: &Container) -> Self {
        let driver = DataDriver::detect_with(|id| container.has(id));
        let bindings = driver
            .map(|d| d.bindings())
            .unwrap_or_default()
            .iter()
            .map(|b| {
                let extensions = container
                    .extensions(b.consumer, b.argument)
                    .map(<[Reference]>::to_vec)
                    .unwrap_or_default();
                (*b, extensions)
            })
            .collect();
        Self {
            environment: environment.to_string(),
            driver,
            bindings,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        let bindings: Vec<serde_json::Value> = self
            .bindings
            .iter()
            .map(|(b, extensions)| {
                serde_json::json!({
                    "consumer": b.consumer,
                    "argument": b.argument,
                    "extensions": extensions.iter().map(Reference::id).collect::<Vec<_>>(),
                })
            })
            .collect();
        serde_json::json!({
            "environment": self.environment,
            "driver": self.driver.map(|d| d.to_string()),
            "bindings": bindings,
        })
    }
}

impl fmt::Display for WiringReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Environment: {}", self.environment)?;
        let Some(driver) = self.driver else {
            return writeln!(f, "Driver: none (query extensions not wired)");
        };
        writeln!(f, "Driver: {}", driver)?;
        for (b, extensions) in &self.bindings {
            writeln!(f, "{}.{}:", b.consumer, b.argument)?;
            if extensions.is_empty() {
                writeln!(f, "  (empty)")?;
            }
            for (n, reference) in extensions.iter().enumerate() {
                writeln!(f, "  {}. {}", n + 1, reference)?;
            }
        }
        Ok(())
    }
}
