//! Generates the gtksourceview pkg-config file for the win32 builds, which is
//! needed when building the introspection files.

fn main() {
    better_panic::install();
    gtksourceview_gen::run_tool("pkgconfig", gtksourceview_gen::pkgconfig::run);
}
