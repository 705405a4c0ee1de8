fn main() -> eframe::Result {
    brush_viewer::run_native()
}
