mod lenient;
pub mod portfolio;
pub mod sections;
pub mod skills;

pub use portfolio::{PortfolioDocument, PortfolioSection, SectionId};
pub use sections::{
    Achievement, Certification, DateRange, Education, Experience, Project, SectionItem,
    SocialLink, SocialPlatform, UserInfo,
};
pub use skills::{LanguageEntry, Proficiency, SkillEntry, Skills, TechnicalKind};
