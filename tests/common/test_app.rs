use bevy::prelude::*;
use sar_core::{
    plugins::SimCorePlugin,
    resources::{CoreConfig, Scene, SimContext, SimServices},
};

// Builder for creating a test application with customizable configuration
#[derive(Default)]
pub struct TestAppBuilder {
    config: Option<CoreConfig>,
    services: Option<SimServices>,
    time_scale: Option<f64>,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: CoreConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_services(mut self, services: SimServices) -> Self {
        self.services = Some(services);
        self
    }

    pub fn with_time_scale(mut self, scale: f64) -> Self {
        self.time_scale = Some(scale);
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);

        if let Some(services) = self.services {
            app.insert_resource(services);
        }
        app.add_plugins(SimCorePlugin::new(self.config.unwrap_or_default()));

        if let Some(scale) = self.time_scale {
            app.world_mut().resource_mut::<SimContext>().set_time_scale(scale);
        }

        // Run an initial update to initialize everything
        app.update();

        TestApp { app }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    pub fn run_frame(&mut self) {
        self.app.update();
    }

    pub fn scene(&self) -> &Scene {
        self.app.world().resource::<Scene>()
    }

    pub fn scene_mut(&mut self) -> Mut<Scene> {
        self.app.world_mut().resource_mut::<Scene>()
    }

    pub fn context(&self) -> SimContext {
        self.app.world().resource::<SimContext>().clone()
    }

    pub fn context_mut(&mut self) -> Mut<SimContext> {
        self.app.world_mut().resource_mut::<SimContext>()
    }

    pub fn send<E: Event>(&mut self, event: E) {
        self.app.world_mut().send_event(event);
    }
}
