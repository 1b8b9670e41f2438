// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use outlay::ledger::Ledger;
use outlay::state::StateStore;
use outlay::{catalog, cli, commands, db};

fn main() -> Result<()> {
    env_logger::init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let conn = db::open_or_init()?;
    let mut ledger = Ledger::open(StateStore::new(conn), catalog::builtin());

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", db::db_path()?.display());
        }
        Some(("tx", sub)) => commands::expenses::handle(&mut ledger, sub)?,
        Some(("category", sub)) => commands::categories::handle(&ledger, sub)?,
        Some(("report", sub)) => commands::reports::handle(&ledger, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&ledger, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&ledger)?,
        Some(("reset", sub)) => {
            if sub.get_flag("yes") {
                ledger.clear_persisted()?;
                println!("Persisted ledger state erased");
            } else {
                eprintln!("reset is destructive; pass --yes to confirm");
            }
        }
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
