//! Clip player - binds the external adaptive player widget to a clip.
//! Keeps the bootstrap side-effects out of the page components: the hosting
//! view only passes a clip identifier and renders whatever phase results.

#[cfg(not(target_arch = "wasm32"))]
mod controller_native;
#[cfg(target_arch = "wasm32")]
mod controller_web;
#[cfg(target_arch = "wasm32")]
mod shaka;

#[cfg(not(target_arch = "wasm32"))]
pub use controller_native::ClipPlayer;
#[cfg(target_arch = "wasm32")]
pub use controller_web::ClipPlayer;
