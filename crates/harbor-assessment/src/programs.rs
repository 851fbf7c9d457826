use serde::Serialize;

/// A coaching program a result can point the user toward.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program {
    pub id: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
    pub cta_label: &'static str,
    pub cta_href: &'static str,
}

static PROGRAMS: [Program; 5] = [
    Program {
        id: "recovery-foundations",
        name: "Recovery Foundations",
        summary: "A self-paced course covering triggers, cravings and daily routines.",
        cta_label: "Start the course",
        cta_href: "/programs/recovery-foundations",
    },
    Program {
        id: "guided-coaching",
        name: "Guided Coaching",
        summary: "Weekly one-on-one sessions with a certified recovery coach.",
        cta_label: "Book a consultation",
        cta_href: "/programs/guided-coaching",
    },
    Program {
        id: "intensive-recovery",
        name: "Intensive Recovery",
        summary: "A 90-day program with daily check-ins and a personalised recovery plan.",
        cta_label: "Request a priority intake",
        cta_href: "/programs/intensive-recovery",
    },
    Program {
        id: "family-support",
        name: "Family Support",
        summary: "Sessions that help loved ones understand recovery and set healthy boundaries.",
        cta_label: "Involve your family",
        cta_href: "/programs/family-support",
    },
    Program {
        id: "aftercare-community",
        name: "Aftercare Community",
        summary: "Peer groups and monthly workshops to keep momentum after the first steps.",
        cta_label: "Join the community",
        cta_href: "/programs/aftercare-community",
    },
];

/// Return all programs, in catalog order.
pub fn all_programs() -> &'static [Program] {
    &PROGRAMS
}

/// Look up a program by id.
pub fn get_program(id: &str) -> Option<&'static Program> {
    PROGRAMS.iter().find(|p| p.id == id)
}

/// Resolve a result's program ids, skipping any the catalog doesn't know.
pub fn resolve(ids: &[String]) -> Vec<&'static Program> {
    ids.iter().filter_map(|id| get_program(id)).collect()
}
