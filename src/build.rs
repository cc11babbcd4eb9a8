// build.rs
fn main() {
    #[cfg(windows)]
    {
        let mut res = winres::WindowsResource::new();
        res.set_icon("assets/baac_scope.ico");
        res.compile().unwrap();
    }
}
