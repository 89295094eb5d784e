use std::sync::Arc;

use crate::bundles::{ApiBundle, DocumentBundle, OrmBundle};
use crate::config::KernelConfig;
use crate::container::{Container, ContainerBuilder};
use crate::kernel::bundle::Bundle;
use crate::kernel::constants;
use crate::kernel::error::{Error, KernelLifecyclePhase, Result};

/// Application kernel: owns the bundle list and the compiled container.
pub struct Kernel {
    config: KernelConfig,
    // Registration order is build and boot order
    bundles: Vec<Box<dyn Bundle>>,
    container: Option<Arc<Container>>,
    booted: bool,
}

impl Kernel {
    /// Creates an empty kernel. Bundles are added with [`register_bundle`](Kernel::register_bundle).
    pub fn new(config: KernelConfig) -> Self {
        log::info!(
            "Initializing {} v{} ({} environment{})",
            constants::APP_NAME,
            constants::APP_VERSION,
            config.environment,
            if config.debug { ", debug" } else { "" }
        );
        Self {
            config,
            bundles: Vec::new(),
            container: None,
            booted: false,
        }
    }

    /// Creates a kernel with the built-in API, ORM and document bundles.
    pub fn with_default_bundles(config: KernelConfig) -> Result<Self> {
        let mut kernel = Self::new(config);
        kernel.register_bundles([
            Box::new(ApiBundle) as Box<dyn Bundle>,
            Box::new(OrmBundle),
            Box::new(DocumentBundle),
        ])?;
        Ok(kernel)
    }

    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    pub fn register_bundle(&mut self, bundle: Box<dyn Bundle>) -> Result<()> {
        let name = bundle.name();
        if self.bundles.iter().any(|b| b.name() == name) {
            return Err(Error::BundleAlreadyRegistered { name: name.to_string() });
        }
        log::debug!("Registered bundle: {}", name);
        self.bundles.push(bundle);
        Ok(())
    }

    pub fn register_bundles<I>(&mut self, bundles: I) -> Result<()>
    where
        I: IntoIterator<Item = Box<dyn Bundle>>,
    {
        for bundle in bundles {
            self.register_bundle(bundle)?;
        }
        Ok(())
    }

    /// Bundle names in registration order
    pub fn bundle_names(&self) -> Vec<&'static str> {
        self.bundles.iter().map(|b| b.name()).collect()
    }

    /// Assembles a container builder without compiling it.
    ///
    /// Bundles contribute first, in registration order, then the
    /// configuration's service table.
    pub fn build(&self) -> Result<ContainerBuilder> {
        let mut builder = ContainerBuilder::new();
        for bundle in &self.bundles {
            log::debug!("Building bundle: {}", bundle.name());
            bundle
                .build(&mut builder, &self.config)
                .map_err(|e| Error::KernelLifecycleError {
                    phase: KernelLifecyclePhase::Build,
                    bundle_name: Some(bundle.name().to_string()),
                    message: "Bundle failed to build".to_string(),
                    source: Some(Box::new(e)),
                })?;
        }
        self.config.register_services(&mut builder)?;
        Ok(builder)
    }

    /// Builds and compiles a fresh container without booting anything.
    pub fn build_container(&self) -> Result<Container> {
        Ok(self.build()?.compile()?)
    }

    /// Compiles the container and boots every bundle against it.
    pub async fn boot(&mut self) -> Result<()> {
        if self.booted {
            return Err(Error::lifecycle(KernelLifecyclePhase::Boot, "Kernel already booted"));
        }

        let container = Arc::new(self.build_container()?);
        log::info!("Booting bundles...");
        for bundle in &self.bundles {
            log::info!("Booting bundle: {}", bundle.name());
            bundle.boot(&container).await.map_err(|e| Error::KernelLifecycleError {
                phase: KernelLifecyclePhase::Boot,
                bundle_name: Some(bundle.name().to_string()),
                message: "Bundle failed to boot".to_string(),
                source: Some(Box::new(e)),
            })?;
        }

        self.container = Some(container);
        self.booted = true;
        log::info!("Kernel booted.");
        Ok(())
    }

    /// Shuts bundles down in reverse registration order.
    pub async fn shutdown(&mut self) -> Result<()> {
        if !self.booted {
            return Ok(());
        }
        log::info!("Shutting down bundles...");
        for bundle in self.bundles.iter().rev() {
            log::info!("Stopping bundle: {}", bundle.name());
            if let Err(e) = bundle.shutdown().await {
                log::error!("Error stopping bundle {}: {}", bundle.name(), e);
                return Err(Error::KernelLifecycleError {
                    phase: KernelLifecyclePhase::Shutdown,
                    bundle_name: Some(bundle.name().to_string()),
                    message: "Bundle failed to stop".to_string(),
                    source: Some(Box::new(e)),
                });
            }
        }
        self.booted = false;
        self.container = None;
        log::info!("Bundle shutdown complete.");
        Ok(())
    }

    pub fn is_booted(&self) -> bool {
        self.booted
    }

    /// The compiled container, once booted
    pub fn container(&self) -> Option<Arc<Container>> {
        self.container.clone()
    }
}
