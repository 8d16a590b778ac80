//! Generates `gtksourceview/gtksourceversion.h` for the win32 builds.

fn main() {
    better_panic::install();
    gtksourceview_gen::run_tool("version-header", gtksourceview_gen::version_header::run);
}
