fn main() {
    bankacct_observability::init();

    let stdout = std::io::stdout();
    if let Err(e) = bankacct_demo::run(&mut stdout.lock()) {
        tracing::error!(error = %e, "scenario aborted");
        eprintln!("Error: {e}");
    }
}
