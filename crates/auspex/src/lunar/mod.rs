pub mod phase;
pub mod report;
pub mod via_combusta;
pub mod void_of_course;

pub use phase::{lunar_phase, LunarPhase, PhaseName};
pub use report::{moon_report, MoonReport};
pub use via_combusta::{in_via_combusta, VIA_COMBUSTA_END, VIA_COMBUSTA_START};
pub use void_of_course::{is_void_of_course, APPLYING_ORB, VOID_TEST_BODIES, VOID_WINDOW_START};
