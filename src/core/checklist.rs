use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub when: &'static str,
    pub task: &'static str,
}

const fn milestone(when: &'static str, task: &'static str) -> Milestone {
    Milestone { when, task }
}

const WEDDING: &[Milestone] = &[
    milestone("T-12 mo", "Set guest list & budget"),
    milestone("T-10 mo", "Book venue & caterer"),
    milestone("T-8 mo", "Secure decor & photo"),
    milestone("T-6 mo", "Send save-the-dates"),
    milestone("T-3 mo", "Finalize menu & music"),
    milestone("T-1 mo", "Confirm all vendors"),
    milestone("Day 0", "Celebrate!"),
];

const BIRTHDAY: &[Milestone] = &[
    milestone("T-4 wk", "Pick theme & invites"),
    milestone("T-3 wk", "Book cake & decor"),
    milestone("T-1 wk", "Confirm RSVPs & food"),
    milestone("Day 0", "Party time!"),
];

const CONFERENCE: &[Milestone] = &[
    milestone("T-6 mo", "Define goals & budget"),
    milestone("T-5 mo", "Secure venue & sponsors"),
    milestone("T-3 mo", "Open registrations"),
    milestone("T-1 mo", "Finalize agenda"),
    milestone("Day 0", "Run the show"),
];

const GENERIC: &[Milestone] = &[milestone("T-4 wk", "Draft basic timeline")];

/// Planning timeline for an event type; unknown types get a one-step generic plan.
pub fn checklist(event_type: &str) -> &'static [Milestone] {
    match event_type.trim().to_lowercase().as_str() {
        "wedding" => WEDDING,
        "birthday" => BIRTHDAY,
        "conference" => CONFERENCE,
        _ => GENERIC,
    }
}
