use estate_cli::{build_cli, execute, init_tracing, verbosity};

fn main() {
    let matches = build_cli().get_matches();
    init_tracing(verbosity(&matches));

    match execute(&matches) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}
