use kestrel_core::move_gen::{AttackIndex, Magics, Tables};
use kestrel_uci::{bench, uci::main_loop};

const ROOK_MAGICS_PATH: &str = "rook-magics.out";
const BISHOP_MAGICS_PATH: &str = "bishop-magics.out";

fn load_attack_index() -> AttackIndex {
    match Magics::load(ROOK_MAGICS_PATH, BISHOP_MAGICS_PATH) {
        Ok(magics) => AttackIndex::new(&magics),
        Err(e) => {
            eprintln!("failed to load magic tables: {e}");
            eprintln!("regenerate them with: cargo run -p magicgen");
            std::process::exit(1);
        }
    }
}

fn main() {
    let attack_index = load_attack_index();
    let tables = Tables::new();

    let args: Vec<String> = std::env::args().collect();
    if args.len() == 2 && args[1] == "bench" {
        let (nodes, elapsed) = bench::run(&tables, &attack_index);
        let nps = if elapsed.as_millis() > 0 {
            nodes * 1000 / elapsed.as_millis() as u64
        } else {
            0
        };
        println!("nodes {nodes} time {} nps {nps}", elapsed.as_millis());
        return;
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    main_loop(stdin.lock(), stdout.lock(), &tables, &attack_index);
}
