use compass_icon::generator;

// Failures are reported on stdout; the process always exits normally.
fn main() {
    let result = generator::generate_default();
    let mut out = std::io::stdout().lock();
    if let Err(e) = generator::report(&mut out, &result) {
        compass_icon::logger::log_error("write report", &e);
    }
}
