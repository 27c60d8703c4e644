use anyhow::{anyhow, Context, Result};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Fullscreen, Window, WindowAttributes, WindowId};

use crate::api::{ConfigureError, LoadCallback, LoadStep, LoadTask};
use crate::config::{EngineConfig, WindowSettings};
use crate::host::{Command, HostHandle};

/// Builds winit window attributes for a configured game window.
pub fn window_attributes(title: &str, settings: &WindowSettings) -> WindowAttributes {
    let mut attrs = Window::default_attributes()
        .with_title(title)
        .with_inner_size(LogicalSize::new(settings.width, settings.height))
        .with_min_inner_size(LogicalSize::new(settings.min_width, settings.min_height))
        .with_resizable(settings.resizable)
        .with_maximized(settings.maximized)
        .with_visible(!settings.hidden);

    if settings.max_width.is_some() || settings.max_height.is_some() {
        attrs = attrs.with_max_inner_size(LogicalSize::new(
            settings.max_width.unwrap_or(u32::MAX),
            settings.max_height.unwrap_or(u32::MAX),
        ));
    }

    if settings.fullscreen {
        attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
    }

    attrs
}

/// Control flow for the event loop: keep polling while the engine runs,
/// otherwise sleep until the next window event.
fn control_flow(started: bool) -> ControlFlow {
    if started {
        ControlFlow::Poll
    } else {
        ControlFlow::Wait
    }
}

/// Entry point for the host runtime.
pub struct Runtime;

impl Runtime {
    /// Runs the load handshake and, if the game starts the engine, the event
    /// loop until the window is closed.
    pub fn run(load: LoadCallback<HostHandle>) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(load);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

struct AppState {
    host: HostHandle,
    load: Option<LoadCallback<HostHandle>>,
    task: Option<LoadTask>,

    window: Option<Window>,

    stall_reported: bool,
    failure: Option<anyhow::Error>,
    exit_requested: bool,
}

impl AppState {
    fn new(load: LoadCallback<HostHandle>) -> Self {
        Self {
            host: HostHandle::new(),
            load: Some(load),
            task: None,
            window: None,
            stall_reported: false,
            failure: None,
            exit_requested: false,
        }
    }

    fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    fn fail(&mut self, err: anyhow::Error) {
        log::error!("{err:#}");
        self.failure = Some(err);
        self.request_exit();
    }

    /// Polls the load task until it finishes or waits on something other
    /// than the host.
    fn drive_load(&mut self, event_loop: &ActiveEventLoop) {
        let Some(mut task) = self.task.take() else {
            return;
        };

        loop {
            let step = task.poll_step();

            // Commands issued during this poll precede whatever suspended it.
            self.apply_commands();

            match step {
                LoadStep::Configure(request) => {
                    let result = self.apply_config(event_loop, &request.config);
                    request.ack(result);
                }
                LoadStep::Suspended => {
                    self.report_stall();
                    self.task = Some(task);
                    return;
                }
                LoadStep::Finished(result) => {
                    self.finish_load(result);
                    return;
                }
                LoadStep::Done => return,
            }
        }
    }

    /// Warns once when the load callback waits on something other than the
    /// host before any window exists; no window events can wake it then.
    fn report_stall(&mut self) {
        if self.stall_reported || self.host.is_configured() {
            return;
        }
        self.stall_reported = true;
        log::warn!(
            "game load callback is suspended on something other than configure; \
             no window exists yet, so the runtime may never resume it"
        );
    }

    fn finish_load(&mut self, result: Result<()>) {
        if let Err(err) = result {
            self.fail(err.context("game load callback failed"));
            return;
        }

        if !self.host.is_configured() {
            self.fail(anyhow!("game load callback finished without configuring the engine"));
        } else if self.host.is_started() {
            log::info!("engine started");
        } else {
            log::info!("game load callback finished without starting the engine");
            self.request_exit();
        }
    }

    fn apply_config(
        &mut self,
        event_loop: &ActiveEventLoop,
        config: &EngineConfig,
    ) -> Result<(), ConfigureError> {
        log::debug!("engine config: {config:?}");

        let settings = WindowSettings::resolve(config.window.as_ref());
        if settings.has_inverted_bounds() {
            log::warn!(
                "window maximum size is below its minimum size; passing bounds through unchanged"
            );
        }

        let window = event_loop
            .create_window(window_attributes(&config.name, &settings))
            .map_err(|e| {
                log::error!("failed to create game window: {e}");
                ConfigureError::WindowCreation(e.to_string())
            })?;

        self.window = Some(window);
        self.host.mark_configured();

        log::info!("engine configured for {:?}", config.name);
        Ok(())
    }

    fn apply_commands(&mut self) {
        for cmd in self.host.drain_commands() {
            match cmd {
                Command::ShowWindow => match &self.window {
                    Some(window) => window.set_visible(true),
                    None => log::warn!("window.show() called before the engine was configured"),
                },
            }
        }
    }

    fn toggle_fullscreen(&self) {
        let Some(window) = &self.window else {
            return;
        };

        if window.fullscreen().is_some() {
            window.set_fullscreen(None);
        } else {
            window.set_fullscreen(Some(Fullscreen::Borderless(None)));
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(load) = self.load.take() {
            log::debug!("running game load callback");
            self.task = Some(LoadTask::new(self.host.clone(), load));
        }

        self.drive_load(event_loop);

        if self.exit_requested {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.drive_load(event_loop);

        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(control_flow(self.host.is_started()));
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                log::info!("window close requested");
                self.request_exit();
            }

            WindowEvent::Resized(size) => {
                log::debug!("window resized to {}x{}", size.width, size.height);
            }

            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed
                    && !event.repeat
                    && event.physical_key == PhysicalKey::Code(KeyCode::F11) =>
            {
                self.toggle_fullscreen();
            }

            _ => {}
        }

        if self.exit_requested {
            event_loop.exit();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::future::pending;

    use winit::dpi::Size;

    use crate::api::{boxed_callback, EngineApi, WindowApi};

    fn idle_state() -> AppState {
        AppState::new(boxed_callback(|_engine, _configure| async { anyhow::Ok(()) }))
    }

    fn logical(w: f64, h: f64) -> Option<Size> {
        Some(Size::Logical(LogicalSize::new(w, h)))
    }

    #[test]
    fn defaults_map_to_attributes() {
        let attrs = window_attributes("Nova", &WindowSettings::default());

        assert_eq!(attrs.title, "Nova");
        assert_eq!(attrs.inner_size, logical(640.0, 480.0));
        assert_eq!(attrs.min_inner_size, logical(640.0, 480.0));
        assert_eq!(attrs.max_inner_size, None);
        assert!(!attrs.resizable);
        assert!(attrs.maximized);
        assert!(attrs.visible);
        assert!(attrs.fullscreen.is_none());
    }

    #[test]
    fn hidden_window_is_not_visible() {
        let settings = WindowSettings {
            hidden: true,
            resizable: true,
            ..WindowSettings::default()
        };
        let attrs = window_attributes("Nova", &settings);

        assert!(!attrs.visible);
        assert!(attrs.resizable);
    }

    #[test]
    fn partial_max_bound_leaves_other_axis_open() {
        let settings = WindowSettings {
            max_width: Some(1920),
            ..WindowSettings::default()
        };
        let attrs = window_attributes("Nova", &settings);

        assert_eq!(attrs.max_inner_size, logical(1920.0, u32::MAX as f64));
    }

    #[test]
    fn fullscreen_is_borderless() {
        let settings = WindowSettings {
            fullscreen: true,
            ..WindowSettings::default()
        };
        let attrs = window_attributes("Nova", &settings);

        assert_eq!(attrs.fullscreen, Some(Fullscreen::Borderless(None)));
    }

    // ── control flow ──────────────────────────────────────────────────────

    #[test]
    fn polls_only_while_running() {
        assert_eq!(control_flow(true), ControlFlow::Poll);
        assert_eq!(control_flow(false), ControlFlow::Wait);
    }

    // ── commands ──────────────────────────────────────────────────────────

    #[test]
    fn show_before_configure_is_ignored() {
        let mut state = idle_state();
        state.host.window().show();

        state.apply_commands();

        assert!(state.window.is_none());
        assert!(state.host.drain_commands().is_empty());
        assert!(state.failure.is_none());
        assert!(!state.exit_requested);
    }

    // ── load completion ───────────────────────────────────────────────────

    #[test]
    fn finishing_unconfigured_is_a_failure() {
        let mut state = idle_state();
        state.finish_load(Ok(()));

        let err = state.failure.take().unwrap();
        assert!(err.to_string().contains("without configuring the engine"));
        assert!(state.exit_requested);
    }

    #[test]
    fn finishing_configured_but_not_started_exits_cleanly() {
        let mut state = idle_state();
        state.host.mark_configured();
        state.finish_load(Ok(()));

        assert!(state.failure.is_none());
        assert!(state.exit_requested);
    }

    #[test]
    fn finishing_started_keeps_running() {
        let mut state = idle_state();
        state.host.mark_configured();
        assert!(state.host.start());
        state.finish_load(Ok(()));

        assert!(state.failure.is_none());
        assert!(!state.exit_requested);
    }

    #[test]
    fn callback_error_is_recorded_with_context() {
        let mut state = idle_state();
        state.finish_load(Err(anyhow!("no display")));

        let err = state.failure.take().unwrap();
        let chain = format!("{err:#}");
        assert!(chain.contains("game load callback failed"));
        assert!(chain.contains("no display"));
        assert!(state.exit_requested);
    }

    // ── stalled load ──────────────────────────────────────────────────────

    #[test]
    fn stall_before_configure_reported_once() {
        let mut state = AppState::new(boxed_callback(|_engine, _configure| async {
            pending::<()>().await;
            anyhow::Ok(())
        }));
        let mut task = LoadTask::new(state.host.clone(), state.load.take().unwrap());
        assert!(matches!(task.poll_step(), LoadStep::Suspended));

        state.report_stall();
        assert!(state.stall_reported);
        state.report_stall();
        assert!(state.stall_reported);
    }

    #[test]
    fn stall_after_configure_is_not_reported() {
        let mut state = idle_state();
        state.host.mark_configured();

        state.report_stall();
        assert!(!state.stall_reported);
    }
}
