mod application;
pub use application::{Application, InstallParams};

mod application_flags;
pub use application_flags::ApplicationFlags;

mod team;
pub use team::{MembershipState, Team, TeamMember};

mod authorization_information;
pub use authorization_information::AuthorizationInformation;
