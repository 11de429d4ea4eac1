use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let context = dir.path().join("context.json");
    let commands = dir.path().join("commands.csv");
    common::write_context(&context)?;
    common::write_commands(
        &commands,
        &[
            ["baggage", "", "2", ""],
            ["insurance", "", "", ""],
            ["select", "10234", "", ""],
            ["confirm", "", "", ""],
        ],
    )?;

    let mut cmd = Command::new(cargo_bin!("skyfare"));
    cmd.arg(&context).arg(&commands);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "passenger,baggage_count,baggage_total,insurance,insurance_total,base_cost,total,state",
        ))
        .stdout(predicate::str::contains(
            "10234,2,Php 100.00,true,Php 200.00,Php 1000.00,Php 1300.00,submitting",
        ));

    Ok(())
}

#[test]
fn test_cli_empty_command_stream_renders_initial_state() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let context = dir.path().join("context.json");
    let commands = dir.path().join("commands.csv");
    common::write_context(&context)?;
    common::write_commands(&commands, &[])?;

    let mut cmd = Command::new(cargo_bin!("skyfare"));
    cmd.arg(&context).arg(&commands);

    cmd.assert().success().stdout(predicate::str::contains(
        ",0,Php 0.00,false,Php 0.00,Php 1000.00,Php 1000.00,disabled",
    ));

    Ok(())
}
