fn main() {
	#[cfg(target_family = "wasm")]
	site_attendance::start();
}
