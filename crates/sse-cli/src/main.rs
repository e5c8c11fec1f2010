use sse_cli::output::print_error;

fn main() {
    if let Err(err) = sse_cli::run() {
        print_error(&err.to_string());
        std::process::exit(1);
    }
}
