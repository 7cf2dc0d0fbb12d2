use std::io::Write;

use assert_cmd::Command;
use predicates as pred;
use predicates::prelude::PredicateBooleanExt;
use tempfile::NamedTempFile;

#[test]
fn end_to_end_session_with_rejections_and_a_closed_account() {
    // mj starts at 3839.01; the oversized transfer, the unknown action and
    // the bad-pin login are all rejected without aborting the run. mj is
    // closed before the final table, so only the other three accounts show.
    let mut file = NamedTempFile::new().expect("create temp file");
    writeln!(
        file,
        "action, user, pin, to, amount\n\
        login, mj, 1111,,\n\
        transfer,,, ah, 200\n\
        transfer,,, ah, 999999\n\
        loan,,,, 500\n\
        frobnicate,,,,\n\
        close, mj, 1111,,\n\
        login, ah, 9999,,\n\
        login, ah, 2222,,"
    )
    .unwrap();

    let exe = env!("CARGO_BIN_EXE_banking_engine");
    let mut cmd = Command::new(exe);
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stdout(pred::str::contains("Welcome back, Maya"))
        .stdout(pred::str::contains("Welcome back, Arthur"))
        .stdout(pred::str::contains("Logged out."))
        .stdout(pred::str::contains("identifier,owner,balance,in,out,interest"))
        .stdout(pred::str::contains("ah,Arthur Holm,11920.00,17100.00,5180.00,256.50"))
        .stdout(pred::str::contains("nlv,Nora Lind Vik,10.00,990.00,980.00,6.58"))
        .stdout(pred::str::contains("sm,Sara Moe,2270.00,2270.00,0.00,21.30"))
        .stdout(pred::str::contains("mj,").not());
}

#[test]
fn sorting_reorders_the_rendered_rows_but_not_the_history() {
    let mut file = NamedTempFile::new().expect("create temp file");
    writeln!(
        file,
        "action, user, pin, to, amount\n\
        login, sm, 4444,,\n\
        sort,,,,"
    )
    .unwrap();

    let exe = env!("CARGO_BIN_EXE_banking_engine");
    let mut cmd = Command::new(exe);
    cmd.arg(file.path());

    // First render is chronological, the re-render after `sort` is ascending
    // with the original chronological labels kept.
    cmd.assert()
        .success()
        .stdout(pred::str::contains(
            "1 deposit 430.00\n\
             2 deposit 1000.00\n\
             3 deposit 700.00\n\
             4 deposit 50.00\n\
             5 deposit 90.00",
        ))
        .stdout(pred::str::contains(
            "4 deposit 50.00\n\
             5 deposit 90.00\n\
             1 deposit 430.00\n\
             3 deposit 700.00\n\
             2 deposit 1000.00",
        ));
}
