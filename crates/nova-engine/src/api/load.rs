use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll, Waker};

use anyhow::Result;

use super::configure::{configure_channel, Configure, ConfigureRequest, PendingConfigure};

type LoadFuture = Pin<Box<dyn Future<Output = Result<()>>>>;

/// A registered load-time callback, type-erased over its future.
pub type LoadCallback<E> = Box<dyn FnOnce(E, Configure) -> LoadFuture>;

/// Boxes a load-time callback into a [`LoadCallback`].
pub fn boxed_callback<E, F, Fut>(callback: F) -> LoadCallback<E>
where
    F: FnOnce(E, Configure) -> Fut + 'static,
    Fut: Future<Output = Result<()>> + 'static,
{
    Box::new(move |engine, configure| Box::pin(callback(engine, configure)))
}

/// Outcome of one [`LoadTask::poll_step`].
#[derive(Debug)]
pub enum LoadStep {
    /// The callback is waiting on something other than the host.
    Suspended,
    /// The callback is suspended on `configure`; the host must ack the request.
    Configure(ConfigureRequest),
    /// The callback ran to completion.
    Finished(Result<()>),
    /// The callback already finished on an earlier step.
    Done,
}

/// Drives a load-time callback on the host thread.
///
/// The host polls with a no-op waker and re-polls after each state change it
/// makes itself (acking a configure request), so no executor is involved.
pub struct LoadTask {
    future: Option<LoadFuture>,
    pending: PendingConfigure,
}

impl LoadTask {
    /// Hands `engine` and a fresh `Configure` to the callback. Nothing runs
    /// until the first [`poll_step`](Self::poll_step).
    pub fn new<E>(engine: E, callback: LoadCallback<E>) -> Self {
        let (configure, pending) = configure_channel();
        Self {
            future: Some(callback(engine, configure)),
            pending,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.future.is_none()
    }

    /// Polls the callback once and reports why it stopped.
    pub fn poll_step(&mut self) -> LoadStep {
        let Some(future) = self.future.as_mut() else {
            return LoadStep::Done;
        };

        let mut cx = Context::from_waker(Waker::noop());
        match future.as_mut().poll(&mut cx) {
            Poll::Ready(result) => {
                self.future = None;
                LoadStep::Finished(result)
            }
            Poll::Pending => match self.pending.try_recv() {
                Ok(request) => LoadStep::Configure(request),
                Err(_) => LoadStep::Suspended,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;
    use std::rc::Rc;

    use anyhow::Context as _;

    use crate::api::ConfigureError;
    use crate::config::EngineConfig;

    type Trace = Rc<RefCell<Vec<&'static str>>>;

    fn task<F, Fut>(trace: &Trace, callback: F) -> LoadTask
    where
        F: FnOnce(Trace, Configure) -> Fut + 'static,
        Fut: Future<Output = Result<()>> + 'static,
    {
        LoadTask::new(trace.clone(), boxed_callback(callback))
    }

    #[test]
    fn nothing_runs_before_first_poll() {
        let trace = Trace::default();
        let t = task(&trace, |trace, _configure| async move {
            trace.borrow_mut().push("ran");
            anyhow::Ok(())
        });

        assert!(trace.borrow().is_empty());
        assert!(!t.is_finished());
    }

    #[test]
    fn suspends_on_configure_then_finishes() {
        let trace = Trace::default();
        let mut t = task(&trace, |trace, configure| async move {
            trace.borrow_mut().push("before");
            configure.call(EngineConfig::new("g")).await?;
            trace.borrow_mut().push("after");
            anyhow::Ok(())
        });

        let LoadStep::Configure(request) = t.poll_step() else {
            panic!("expected a configure request");
        };
        assert_eq!(request.config.name, "g");
        assert_eq!(*trace.borrow(), ["before"]);

        request.ack(Ok(()));

        assert!(matches!(t.poll_step(), LoadStep::Finished(Ok(()))));
        assert_eq!(*trace.borrow(), ["before", "after"]);
        assert!(t.is_finished());
        assert!(matches!(t.poll_step(), LoadStep::Done));
    }

    #[test]
    fn unacked_request_keeps_task_suspended() {
        let trace = Trace::default();
        let mut t = task(&trace, |_trace, configure| async move {
            configure.call(EngineConfig::new("g")).await?;
            anyhow::Ok(())
        });

        let LoadStep::Configure(request) = t.poll_step() else {
            panic!("expected a configure request");
        };
        assert!(matches!(t.poll_step(), LoadStep::Suspended));

        request.ack(Ok(()));
        assert!(matches!(t.poll_step(), LoadStep::Finished(Ok(()))));
    }

    #[test]
    fn rejection_propagates_as_error() {
        let trace = Trace::default();
        let mut t = task(&trace, |trace, configure| async move {
            configure
                .call(EngineConfig::new("g"))
                .await
                .context("configure failed")?;
            trace.borrow_mut().push("unreachable");
            anyhow::Ok(())
        });

        let LoadStep::Configure(request) = t.poll_step() else {
            panic!("expected a configure request");
        };
        request.ack(Err(ConfigureError::WindowCreation("no display".into())));

        let LoadStep::Finished(Err(err)) = t.poll_step() else {
            panic!("expected the callback to fail");
        };
        assert!(format!("{err:#}").contains("no display"));
        assert!(trace.borrow().is_empty());
    }

    #[test]
    fn callback_may_finish_without_configuring() {
        let trace = Trace::default();
        let mut t = task(&trace, |_trace, _configure| async move { anyhow::Ok(()) });

        assert!(matches!(t.poll_step(), LoadStep::Finished(Ok(()))));
    }
}
