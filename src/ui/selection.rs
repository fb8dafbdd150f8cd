use std::collections::HashSet;

use crate::users::User;

/// Users picked so far, in the order they were picked.
///
/// `emails` always holds exactly the emails present in `users`.
#[derive(Debug, Default, Clone)]
pub struct Selection {
	users: Vec<User>,
	emails: HashSet<String>,
}

impl Selection {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Append `user` unless a user with the same email or id is already
	/// selected.
	///
	/// Returns whether the selection changed.
	pub fn insert(&mut self, user: User) -> bool {
		if self.contains(&user) {
			return false;
		}
		self.emails.insert(user.email.clone());
		self.users.push(user);
		true
	}

	/// Remove the entry whose id matches `id`, returning it.
	pub fn remove_by_id(&mut self, id: u64) -> Option<User> {
		let position = self.users.iter().position(|u| u.id == id)?;
		let removed = self.users.remove(position);
		self.emails.remove(&removed.email);
		Some(removed)
	}

	/// Remove the most recently selected user.
	pub fn pop(&mut self) -> Option<User> {
		let removed = self.users.pop()?;
		self.emails.remove(&removed.email);
		Some(removed)
	}

	#[must_use]
	pub fn contains_email(&self, email: &str) -> bool {
		self.emails.contains(email)
	}

	#[must_use]
	pub fn contains_id(&self, id: u64) -> bool {
		self.users.iter().any(|u| u.id == id)
	}

	/// Whether `user` clashes with a selected entry by email or id, i.e.
	/// whether [`Selection::insert`] would refuse it.
	#[must_use]
	pub fn contains(&self, user: &User) -> bool {
		self.contains_email(&user.email) || self.contains_id(user.id)
	}

	#[must_use]
	pub fn users(&self) -> &[User] {
		&self.users
	}

	#[must_use]
	pub fn emails(&self) -> &HashSet<String> {
		&self.emails
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.users.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.users.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn user(id: u64, email: &str) -> User {
		User {
			id,
			email: email.to_string(),
			first_name: format!("U{id}"),
			last_name: String::new(),
			image: String::new(),
		}
	}

	fn assert_consistent(selection: &Selection) {
		let expected: HashSet<String> = selection
			.users()
			.iter()
			.map(|u| u.email.clone())
			.collect();
		assert_eq!(selection.emails(), &expected);
	}

	#[test]
	fn email_set_tracks_every_mutation() {
		let mut selection = Selection::new();
		let steps: Vec<Box<dyn Fn(&mut Selection)>> = vec![
			Box::new(|s| {
				s.insert(user(1, "a@x.com"));
			}),
			Box::new(|s| {
				s.insert(user(2, "b@x.com"));
			}),
			Box::new(|s| {
				s.insert(user(3, "a@x.com"));
			}),
			Box::new(|s| {
				s.remove_by_id(1);
			}),
			Box::new(|s| {
				s.remove_by_id(42);
			}),
			Box::new(|s| {
				s.insert(user(1, "a@x.com"));
			}),
			Box::new(|s| {
				s.pop();
			}),
			Box::new(|s| {
				s.pop();
			}),
			Box::new(|s| {
				s.pop();
			}),
		];

		for step in steps {
			step(&mut selection);
			assert_consistent(&selection);
		}
		assert!(selection.is_empty());
	}

	#[test]
	fn duplicate_email_is_rejected_until_removed() {
		let mut selection = Selection::new();
		assert!(selection.insert(user(1, "a@x.com")));
		assert!(!selection.insert(user(9, "a@x.com")));
		assert_eq!(selection.len(), 1);

		selection.remove_by_id(1);
		assert!(selection.insert(user(9, "a@x.com")));
	}

	#[test]
	fn removing_unknown_id_is_silent() {
		let mut selection = Selection::new();
		selection.insert(user(1, "a@x.com"));
		assert!(selection.remove_by_id(2).is_none());
		assert_eq!(selection.len(), 1);
	}

	#[test]
	fn pop_removes_in_reverse_selection_order() {
		let mut selection = Selection::new();
		selection.insert(user(1, "al@x.com"));
		selection.insert(user(2, "bo@x.com"));

		let removed = selection.pop().expect("a user");
		assert_eq!(removed.id, 2);
		assert!(selection.contains_email("al@x.com"));
		assert!(!selection.contains_email("bo@x.com"));
	}
}
