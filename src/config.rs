/// COM concurrency model requested for the enumerating thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ComThreading {
    /// Single-threaded apartment (`COINIT_APARTMENTTHREADED`).
    Apartment,
    /// Multithreaded apartment (`COINIT_MULTITHREADED`).
    #[default]
    MultiThreaded,
}

/// Configuration for connecting to the system device enumerator.
#[derive(Debug, Clone, Default)]
pub struct EnumeratorConfig {
    threading: ComThreading,
}

impl EnumeratorConfig {
    /// Set the COM concurrency model.
    ///
    /// If COM is already initialized on the calling thread with another
    /// model, the existing apartment is used as is.
    pub fn with_threading(mut self, threading: ComThreading) -> Self {
        self.threading = threading;
        self
    }

    pub fn threading(&self) -> ComThreading {
        self.threading
    }
}
