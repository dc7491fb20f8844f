mod tables;

pub use self::tables::{
    event_breakdown as print_event_breakdown, momentum as print_momentum_report,
    pressing as print_pressing_report, team_stats as print_team_stats,
    transitions as print_transition_report,
};
