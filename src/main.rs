fn main() -> std::process::ExitCode {
    tabkit_lib::run()
}
