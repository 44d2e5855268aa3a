use std::fmt::Write as _;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

#[derive(Clone, Default)]
struct WarnCapture(Arc<Mutex<Vec<String>>>);

struct Collect(String);

impl Visit for Collect {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let _ = write!(self.0, "{}={:?} ", field.name(), value);
    }
}

impl<S: tracing::Subscriber> Layer<S> for WarnCapture {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == tracing::Level::WARN {
            let mut collect = Collect(String::new());
            event.record(&mut collect);
            self.0.lock().unwrap().push(collect.0);
        }
    }
}

/// 在 f 执行期间捕获当前线程的 WARN 事件，返回其字段渲染结果
pub fn capture_warns<F: FnOnce()>(f: F) -> Vec<String> {
    let capture = WarnCapture::default();
    let subscriber = tracing_subscriber::registry().with(capture.clone());
    tracing::subscriber::with_default(subscriber, f);
    let warns = capture.0.lock().unwrap().clone();
    warns
}
