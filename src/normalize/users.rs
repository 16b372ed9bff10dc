// Human account filter over passwd-style lines

use crate::models::HumanAccount;

/// Accounts below this uid are system accounts.
pub const MIN_HUMAN_UID: i64 = 1000;

const NOBODY: &str = "nobody";

/// Keep only lines describing a human user, in input order.
///
/// Malformed lines (wrong field count, non-numeric uid/gid) are skipped, not reported.
pub fn filter_human_users<S: AsRef<str>>(lines: &[S]) -> Vec<HumanAccount> {
    lines
        .iter()
        .filter_map(|line| parse_human(line.as_ref()))
        .collect()
}

fn parse_human(line: &str) -> Option<HumanAccount> {
    if line.starts_with('#') {
        return None;
    }
    let fields: Vec<&str> = line.split(':').collect();
    let [username, password, uid, gid, gecos, home, shell] = fields.as_slice() else {
        return None;
    };
    let uid: i64 = uid.parse().ok()?;
    let gid: i64 = gid.parse().ok()?;
    if uid < MIN_HUMAN_UID || *username == NOBODY {
        return None;
    }

    let info: Vec<String> = gecos
        .split(',')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    Some(HumanAccount {
        username: username.to_string(),
        password_field: password.to_string(),
        uid,
        gid,
        additional_info: (!info.is_empty()).then_some(info),
        home_directory: home.to_string(),
        default_shell: shell.to_string(),
    })
}
