fn main() {
    #[cfg(target_arch = "wasm32")]
    staffboard_frontend::mount();
}
