use std::time::Duration;

use clap::Parser;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use indoc::indoc;

use civitas_desk::content::TextPanel;
use civitas_desk::runner::{ControlFlow, restore_terminal, run, setup_terminal};
use civitas_desk::{Desk, DeskResult, WindowSpec};

/// Demo desk hosting the notary-office data-entry panels.
#[derive(Debug, Parser)]
#[command(name = "civitas-desk", version, about)]
struct Args {
    /// Input poll interval in milliseconds.
    #[arg(long, default_value_t = 16)]
    tick_ms: u64,

    /// Log at debug level instead of info.
    #[arg(long)]
    verbose: bool,
}

fn open_cliente(desk: &mut Desk) {
    desk.open(
        WindowSpec::new("cliente", "Cadastro de Clientes").size(70, 18),
        Box::new(TextPanel::new(indoc! {"
            Nome completo:
            CPF:
            Endereco:
            Cidade:

            Drag this window by its title bar. Opening the same panel
            again focuses this one instead of creating a second copy.
        "})),
    );
}

fn open_protocolo(desk: &mut Desk) {
    desk.open(
        WindowSpec::new("protocolo", "Lancamento de Protocolo").size(64, 14),
        Box::new(TextPanel::new(indoc! {"
            Numero do protocolo:
            Tipo de documento:
            Apresentante:
            Data de entrada:
        "})),
    );
}

fn open_cidade(desk: &mut Desk) {
    desk.open(
        WindowSpec::new("cidade", "Cadastro de Cidades").size(50, 10),
        Box::new(TextPanel::new(indoc! {"
            Cidade:
            UF:
            Codigo IBGE:
        "})),
    );
}

fn main() -> DeskResult<()> {
    let args = Args::parse();
    civitas_desk::tracing_sub::init_default(args.verbose);

    let mut desk = Desk::new();
    let mut terminal = setup_terminal()?;

    open_cliente(&mut desk);
    open_protocolo(&mut desk);

    let result = run(
        &mut terminal,
        &mut desk,
        Duration::from_millis(args.tick_ms),
        |desk, event| {
            if let Event::Key(key) = event
                && key.kind == KeyEventKind::Press
            {
                match key.code {
                    KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return ControlFlow::Quit;
                    }
                    KeyCode::F(2) => open_cliente(desk),
                    KeyCode::F(3) => open_protocolo(desk),
                    KeyCode::F(4) => open_cidade(desk),
                    KeyCode::F(5) => desk.close_all(),
                    _ => {}
                }
            }
            ControlFlow::Continue
        },
    );

    restore_terminal(&mut terminal)?;
    result
}
