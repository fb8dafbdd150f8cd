use anyhow::Result;
use pillpick::SelectionOutcome;

/// Print one `First Last <email>` line per selected user.
pub(crate) fn print_plain(outcome: &SelectionOutcome) {
	if !outcome.accepted {
		println!("Selection cancelled (query: '{}')", outcome.query);
		return;
	}

	if outcome.users.is_empty() {
		println!("No users selected");
		return;
	}

	for user in &outcome.users {
		println!("{} <{}>", user.full_name(), user.email);
	}
}

/// Format the selection outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SelectionOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the selection outcome.
pub(crate) fn print_json(outcome: &SelectionOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use pillpick::User;
	use serde_json::Value;

	use super::*;

	#[test]
	fn json_format_lists_users_in_camel_case() {
		let outcome = SelectionOutcome {
			accepted: true,
			query: String::new(),
			users: vec![User {
				id: 7,
				email: "al@x.com".into(),
				first_name: "Al".into(),
				last_name: "B".into(),
				image: "https://example.com/7.png".into(),
			}],
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], true);
		assert_eq!(value["users"][0]["id"], 7);
		assert_eq!(value["users"][0]["firstName"], "Al");
		assert_eq!(value["users"][0]["email"], "al@x.com");
	}

	#[test]
	fn json_format_for_cancelled_run_has_empty_users() {
		let outcome = SelectionOutcome {
			accepted: false,
			query: "zz".into(),
			users: Vec::new(),
		};

		let value: Value =
			serde_json::from_str(&format_outcome_json(&outcome).expect("json")).expect("parse");
		assert_eq!(value["accepted"], false);
		assert_eq!(value["query"], "zz");
		assert!(value["users"].as_array().is_some_and(Vec::is_empty));
	}
}
