use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if args.is_empty() {
        eprintln!("usage: example <uri>..");
        return ExitCode::FAILURE;
    }

    let mut code = ExitCode::SUCCESS;

    for raw in args {
        match luri::parse(&raw) {
            Ok(uri) => {
                println!("{raw}");
                println!("  scheme: {}", uri.scheme());
                if let Some(user) = uri.user() {
                    println!("  user: {user}");
                }
                if let Some(password) = uri.password() {
                    println!("  password: {password}");
                }
                if let Some(host) = uri.host() {
                    println!("  host: {host}");
                }
                if let Some(port) = uri.port() {
                    println!("  port: {port}");
                }
                println!("  path: {:?}", uri.path());
                for (key, value) in uri.query().iter() {
                    println!("  query: {key}={value}");
                }
                if let Some(fragment) = uri.fragment() {
                    println!("  fragment: {fragment}");
                }
            }
            Err(err) => {
                eprintln!("{err}");
                code = ExitCode::FAILURE;
            }
        }
    }

    code
}
