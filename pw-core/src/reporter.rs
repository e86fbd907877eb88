use tracing::*;

// The handle to the running test: everything the poller wants the test harness to see goes
// through `log`, and `fail_now` ends the test on the spot.
pub trait TestReporter: Send + Sync {
    fn log(&self, msg: &str);
    fn fail_now(&self, msg: &str) -> !;
}

#[derive(Clone, Debug)]
pub struct TracingReporter {
    name: String,
}

impl TracingReporter {
    pub fn new(name: &str) -> TracingReporter {
        TracingReporter { name: name.into() }
    }

    // The libtest harness names each test thread after the test that's running on it
    pub fn current() -> TracingReporter {
        TracingReporter::new(std::thread::current().name().unwrap_or("unnamed-test"))
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl TestReporter for TracingReporter {
    fn log(&self, msg: &str) {
        info!(test = %self.name, "{msg}");
    }

    fn fail_now(&self, msg: &str) -> ! {
        error!(test = %self.name, "{msg}");
        panic!("{}: {msg}", self.name);
    }
}

// Keeps every logged line so tests can check exactly what the poller told the harness
#[cfg(any(test, feature = "mock"))]
#[derive(Debug, Default)]
pub struct RecordingReporter {
    lines: std::sync::Mutex<Vec<String>>,
}

#[cfg(any(test, feature = "mock"))]
impl RecordingReporter {
    pub fn new() -> RecordingReporter {
        Default::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_else(|e| e.into_inner().clone())
    }
}

#[cfg(any(test, feature = "mock"))]
impl TestReporter for RecordingReporter {
    fn log(&self, msg: &str) {
        match self.lines.lock() {
            Ok(mut l) => l.push(msg.into()),
            Err(e) => e.into_inner().push(msg.into()),
        }
    }

    fn fail_now(&self, msg: &str) -> ! {
        self.log(msg);
        panic!("{msg}");
    }
}
