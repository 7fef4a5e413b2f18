use assert_cmd::Command;
use predicates::str::contains;

fn run(script: &str) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("booking_core_cli").unwrap();
    cmd.env("BOOKING_CLI_SCRIPT", "1")
        .write_stdin(script.to_string())
        .assert()
}

#[test]
fn script_mode_runs_the_demo_flow() {
    run("demo\ncategories\nservices\nexit\n")
        .success()
        .stdout(contains("Loaded the sample business data set"))
        .stdout(contains("Hair Care"))
        .stdout(contains("Deep Tissue Massage"));
}

#[test]
fn deleting_a_service_cascades_and_frees_its_category() {
    let script = "demo\n\
        remove-service \"Deep Tissue Massage\"\n\
        remove-category Wellness\n\
        exit\n";
    run(script)
        .success()
        .stdout(contains(
            "Service `Deep Tissue Massage` deleted along with 1 appointment(s).",
        ))
        .stdout(contains("Category `Wellness` deleted."));
}

#[test]
fn category_in_use_is_refused_with_an_error() {
    run("demo\nremove-category \"Hair Care\"\nexit\n")
        .success()
        .stdout(contains(
            "ERROR: category `Hair Care` still has 1 linked service(s)",
        ));
}

#[test]
fn booking_and_filtering_through_the_shell() {
    let script = "demo\n\
        book \"Hair Cut & Style\" 2030-01-02 10:00 \"Pat Doe\" pat@example.com\n\
        appointments --date upcoming pat\n\
        status \"Pat Doe\" no-show\n\
        restore \"Pat Doe\"\n\
        exit\n";
    run(script)
        .success()
        .stdout(contains("Booked `Hair Cut & Style` for Pat Doe on 2030-01-02 at 10:00"))
        .stdout(contains("Pat Doe"))
        .stdout(contains("is now no-show"))
        .stdout(contains("restored to confirmed"));
}

#[test]
fn unknown_commands_suggest_a_correction() {
    run("servces\nexit\n")
        .success()
        .stdout(contains("Did you mean `services`?"));
}

#[test]
fn profile_fields_and_hours_are_scriptable() {
    let script = "set-profile name Studio Nine\n\
        hours saturday 10:00 15:00\n\
        hours monday closed\n\
        profile\n\
        exit\n";
    run(script)
        .success()
        .stdout(contains("Profile name updated."))
        .stdout(contains("Saturday"))
        .stdout(contains("Name:        Studio Nine"))
        .stdout(contains("Open 5 day(s), 37 hour(s) per week."));
}
