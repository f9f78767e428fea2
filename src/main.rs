fn main() {
    platform_installer::app::cli::run();
}
