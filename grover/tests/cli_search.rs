#[cfg(test)]
mod test {
    use assert_cmd::Command;
    use predicates::{function::function, str::contains};
    use rstest::{fixture, rstest};

    const DB: [&str; 8] = [
        "Bob", "Eve", "Mallory", "Trent", "Peggy", "Alice", "Victor", "Alice",
    ];

    #[fixture]
    fn cmd() -> Command {
        let mut cmd = Command::cargo_bin("grover").unwrap();
        cmd.arg("search").arg("--seed").arg("7");
        cmd
    }

    fn first_result(out: &str) -> Option<&str> {
        out.lines().skip_while(|l| !l.starts_with("Measurement results")).nth(1)
    }

    #[rstest]
    fn single(mut cmd: Command) {
        cmd.arg("Alice")
            .args(DB)
            .assert()
            .success()
            .stdout(contains("Marked 5 (|101⟩) with 2 iterations over 3 qubits"))
            .stdout(function(|out: &str| {
                first_result(out).is_some_and(|l| l.starts_with("|101⟩ (index 5, 'Alice'): "))
            }));
    }

    #[rstest]
    fn multi(mut cmd: Command) {
        cmd.arg("Alice")
            .args(DB)
            .arg("--multi")
            .assert()
            .success()
            .stdout(contains("Marked 5 (|101⟩), 7 (|111⟩) with 1 iterations over 3 qubits"))
            .stdout(contains("Success rate: 100.0% of 1000 shots"));
    }

    #[rstest]
    fn json(mut cmd: Command) {
        let out = cmd
            .arg("Alice")
            .args(DB)
            .arg("--multi")
            .arg("--shots")
            .arg("250")
            .arg("--json")
            .output()
            .unwrap();
        assert!(out.status.success());
        let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
        assert_eq!(v["marked"], serde_json::json!([5, 7]));
        assert_eq!(v["shots"], 250);
        let total: u64 = v["rows"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["count"].as_u64().unwrap())
            .sum();
        assert_eq!(total, 250);
    }

    #[rstest]
    fn seeded_runs_repeat(mut cmd: Command) {
        let first = cmd.arg("Alice").args(DB).output().unwrap();
        let mut again = Command::cargo_bin("grover").unwrap();
        again
            .arg("search")
            .arg("--seed")
            .arg("7")
            .arg("Alice")
            .args(DB)
            .assert()
            .success()
            .stdout(String::from_utf8(first.stdout).unwrap());
    }

    #[rstest]
    fn qasm(mut cmd: Command) {
        cmd.arg("Alice")
            .args(DB)
            .arg("--qasm")
            .assert()
            .success()
            .stdout(contains("qreg q[3];\ncreg c[3];\nh q[0];"))
            .stdout(contains("measure q[2] -> c[2];"));
    }

    #[rstest]
    fn from_file(mut cmd: Command) {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("db.txt");
        std::fs::write(&input, DB.join("\n")).unwrap();
        cmd.arg("Trent")
            .arg("--input")
            .arg(&input)
            .assert()
            .success()
            .stdout(contains("Marked 3 (|011⟩)"));
    }

    #[rstest]
    fn to_file(mut cmd: Command) {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("result.json");
        cmd.arg("Eve")
            .args(DB)
            .arg("--json")
            .arg("--out")
            .arg(&out)
            .assert()
            .success()
            .stdout("");
        let v: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(v["marked"], serde_json::json!([1]));
    }

    #[rstest]
    fn not_found(mut cmd: Command) {
        cmd.arg("Zzz")
            .args(DB)
            .assert()
            .failure()
            .stderr(contains("Target 'Zzz' not found in database."));
    }

    #[rstest]
    fn not_found_multi(mut cmd: Command) {
        cmd.arg("Zzz")
            .args(DB)
            .arg("--multi")
            .assert()
            .failure()
            .stderr(contains("Target 'Zzz' not found in database."));
    }

    #[rstest]
    fn missing_items(mut cmd: Command) {
        cmd.arg("Alice").assert().failure().stderr(contains(
            "the following required arguments were not provided",
        ));
    }

    #[rstest]
    fn doesnt_exist(mut cmd: Command) {
        cmd.arg("Alice")
            .arg("--input")
            .arg("blah")
            .assert()
            .failure()
            .stderr(contains("IO error"));
    }

    #[rstest]
    fn json_and_qasm(mut cmd: Command) {
        cmd.arg("Alice")
            .args(DB)
            .arg("--json")
            .arg("--qasm")
            .assert()
            .failure()
            .stderr(contains("cannot be used with"));
    }
}
