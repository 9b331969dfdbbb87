//! Platform glue for spawning detached async work.

use std::future::Future;

/// Run a future to completion in the background. On the web this lands on the
/// browser microtask queue; natively it needs an ambient tokio runtime (the
/// server bundle provides one).
#[cfg(target_arch = "wasm32")]
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    let _ = tokio::spawn(future);
}
