// Computer patterns demo: builds three computers, swaps their parts, logs users
// in and out, and prices decorated variants.

use colored::Colorize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use computer_patterns::capability::{
    Amd, InternalMemory, Intel, Keyboard, Monitor, Mouse, Nvidia, Projector, Ssd, TouchScreen,
};
use computer_patterns::computer::{Chassis, Computer, Desktop, Laptop, Walltop};
use computer_patterns::config::DemoConfig;
use computer_patterns::decorator::{BacklightDecorator, HdmiDecorator, TypeCDecorator};
use computer_patterns::session::Session;
use computer_patterns::transcript::Transcript;
use computer_patterns::{DemoError, SessionError};

fn init_logging(default_filter: &str) -> Result<(), DemoError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| DemoError::Logging(err.to_string()))
}

fn print_user(computer: &impl Computer) -> Result<(), DemoError> {
    let user = computer.user().ok_or(SessionError::NoActiveSession)?;
    println!("{} {}", user.username()?, user.password()?);
    Ok(())
}

fn print_listing(computer: &impl Computer) {
    println!("{} {}", "Name:".bold(), computer.name());
    println!("{} {}", "Price:".bold(), computer.price());
    println!();
}

fn run(config: &DemoConfig) -> Result<(), DemoError> {
    let transcript = || Transcript::from_mode(config.transcript, config.color);

    // ------------------------------------------------------------------------
    // Desktop: swap input and memory, then log the user out
    // ------------------------------------------------------------------------
    let chassis = Chassis::new(Keyboard, Nvidia, InternalMemory, Projector, Session::login("Franco", "123"))
        .with_transcript(transcript());
    let mut desktop = Desktop::new(chassis);
    print_user(&desktop)?;
    desktop.set_input(TouchScreen);
    desktop.input("blah");
    desktop.set_memory(Ssd);
    desktop.process("see");
    desktop.store("1");
    desktop.output("12");
    Session::logout();

    let desktop_with_hdmi = HdmiDecorator::new(desktop);
    print_listing(&desktop_with_hdmi);

    // ------------------------------------------------------------------------
    // Laptop: new login, output swapped to a monitor, user stays logged in
    // ------------------------------------------------------------------------
    let chassis = Chassis::new(Mouse, Amd, Ssd, Projector, Session::login("Pauline", "pkt"))
        .with_transcript(transcript());
    let mut laptop = Laptop::new(chassis);
    print_user(&laptop)?;
    laptop.input("soo");
    laptop.process("ts");
    laptop.store("2");
    laptop.set_output_device(Monitor);
    laptop.output("12");
    laptop.fold();

    let laptop_with_backlight = BacklightDecorator::new(laptop);
    print_listing(&laptop_with_backlight);

    // ------------------------------------------------------------------------
    // Walltop: login is ignored because the laptop user never logged out
    // ------------------------------------------------------------------------
    let chassis = Chassis::new(Keyboard, Intel, Ssd, Monitor, Session::login("Oliver", "pasd"))
        .with_transcript(transcript());
    let mut walltop = Walltop::new(chassis);
    print_user(&walltop)?;
    walltop.set_processor_chip(Nvidia);
    walltop.process("s");
    walltop.set_memory(InternalMemory);
    walltop.store("3");
    walltop.set_input(TouchScreen);
    walltop.input("simsim");
    walltop.output("abs");

    let mut walltop_with_type_c = TypeCDecorator::new(walltop);
    print_listing(&walltop_with_type_c);
    walltop_with_type_c.set_price(2_000_000);
    // still the computed price
    println!("{} {}", "Price after set_price:".bold(), walltop_with_type_c.price());

    Ok(())
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let result = DemoConfig::load(&args)
        .map_err(DemoError::from)
        .and_then(|config| {
            if !config.color {
                colored::control::set_override(false);
            }
            init_logging(&config.log_filter)?;
            info!(?config, "starting demo");
            run(&config)
        });

    if let Err(err) = result {
        eprintln!("{} {err}", "error:".red().bold());
        std::process::exit(1);
    }
}
