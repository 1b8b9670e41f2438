// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::utils::pretty_table;
use anyhow::Result;

// The catalog is fixed reference data, so unlike expenses there is nothing
// to add or remove here.
pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", _)) => {
            let rows: Vec<Vec<String>> = ledger
                .catalog()
                .iter()
                .map(|c| {
                    vec![
                        c.id.clone(),
                        c.name.clone(),
                        c.icon.clone(),
                        c.color.clone(),
                    ]
                })
                .collect();
            println!("{}", pretty_table(&["Id", "Name", "Icon", "Color"], rows));
        }
        _ => {}
    }
    Ok(())
}
