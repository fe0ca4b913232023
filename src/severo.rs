//! The logger object: a backend, its current context and derived handle.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::backend::{Backend, Options};
use crate::context::Context;
use crate::handle::Handle;
use crate::level::Level;
use crate::sink::Sink;

struct State {
    backend: Backend,
    context: Context,
    handle: Arc<Handle>,
}

/// Context-aware logger.
///
/// The context and the handle built for it are swapped together under one
/// lock, so a writer always sees a handle that matches some complete
/// context switch.
pub struct SeveroLog {
    state: RwLock<State>,
}

impl SeveroLog {
    /// Logger writing colored lines to stdout in the `Default` context.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> SeveroLogBuilder {
        SeveroLogBuilder::default()
    }

    /// Switches context, rebuilding the derived handle.
    pub fn set_context(&self, context: Context) {
        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            apply_context(&mut state.backend, context);
            state.context = context;
            state.handle = Arc::new(state.backend.new_handle());
        }
        tracing::debug!(%context, "log context switched");
    }

    pub fn context(&self) -> Context {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .context
    }

    /// Rebuilds the derived handle from the backend's current options.
    pub fn reset_logger(&self) {
        let context = {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            state.handle = Arc::new(state.backend.new_handle());
            state.context
        };
        tracing::trace!(%context, "log handle rebuilt");
    }

    /// Current derived handle. It does not follow later context switches.
    pub fn logger(&self) -> Arc<Handle> {
        Arc::clone(
            &self
                .state
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .handle,
        )
    }

    #[track_caller]
    pub fn print(&self, args: fmt::Arguments<'_>) {
        self.logger().print(args);
    }

    #[track_caller]
    pub fn panic(&self, args: fmt::Arguments<'_>) -> ! {
        self.logger().panic(args)
    }

    #[track_caller]
    pub fn fatal(&self, args: fmt::Arguments<'_>) -> ! {
        self.logger().fatal(args)
    }
}

impl Default for SeveroLog {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SeveroLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeveroLog")
            .field("context", &self.context())
            .finish_non_exhaustive()
    }
}

fn apply_context(backend: &mut Backend, context: Context) {
    let profile = context.profile();
    backend.set_default_level(Level::Info);
    backend.set_omit_headers(profile.omit_headers);
    backend.set_flags(profile.flags);
    backend.set_min_level(profile.min_level);
}

/// Builder for a [`SeveroLog`] with a custom sink, options or context.
#[derive(Debug, Default)]
pub struct SeveroLogBuilder {
    sink: Option<Sink>,
    options: Options,
    context: Context,
}

impl SeveroLogBuilder {
    pub fn sink(mut self, sink: Sink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Base options. Context-controlled fields are overwritten on build.
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    pub fn build(self) -> SeveroLog {
        let sink = self.sink.unwrap_or_else(Sink::stdout);
        let mut backend = Backend::new(sink, self.options);
        apply_context(&mut backend, self.context);
        let handle = Arc::new(backend.new_handle());
        SeveroLog {
            state: RwLock::new(State {
                backend,
                context: self.context,
                handle,
            }),
        }
    }
}
