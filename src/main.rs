use confetti::Confetti;

fn main() {
    env_logger::init();

    if let Err(e) = Confetti::new().with_title("confetti - click anywhere").run() {
        eprintln!("confetti: {}", e);
        std::process::exit(1);
    }
}
