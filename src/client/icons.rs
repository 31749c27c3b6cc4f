use std::{fmt, str::FromStr};

/// Icons a skill may name. Stored skills carry the identifier as text;
/// anything outside this set renders without an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillIcon {
    React,
    NodeJs,
    Js,
    Html5,
    Css3,
    Python,
    Java,
    Rust,
    GitAlt,
    Github,
    Docker,
    Aws,
    Database,
    Linux,
    Figma,
    Npm,
    Angular,
    Vuejs,
    Sass,
    Bootstrap,
    Php,
    Code,
}

const ICON_NAMES: [(SkillIcon, &str); 22] = [
    (SkillIcon::React, "FaReact"),
    (SkillIcon::NodeJs, "FaNodeJs"),
    (SkillIcon::Js, "FaJs"),
    (SkillIcon::Html5, "FaHtml5"),
    (SkillIcon::Css3, "FaCss3Alt"),
    (SkillIcon::Python, "FaPython"),
    (SkillIcon::Java, "FaJava"),
    (SkillIcon::Rust, "FaRust"),
    (SkillIcon::GitAlt, "FaGitAlt"),
    (SkillIcon::Github, "FaGithub"),
    (SkillIcon::Docker, "FaDocker"),
    (SkillIcon::Aws, "FaAws"),
    (SkillIcon::Database, "FaDatabase"),
    (SkillIcon::Linux, "FaLinux"),
    (SkillIcon::Figma, "FaFigma"),
    (SkillIcon::Npm, "FaNpm"),
    (SkillIcon::Angular, "FaAngular"),
    (SkillIcon::Vuejs, "FaVuejs"),
    (SkillIcon::Sass, "FaSass"),
    (SkillIcon::Bootstrap, "FaBootstrap"),
    (SkillIcon::Php, "FaPhp"),
    (SkillIcon::Code, "FaCode"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownIcon(pub String);

impl fmt::Display for UnknownIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown icon identifier: {}", self.0)
    }
}

impl std::error::Error for UnknownIcon {}

impl SkillIcon {
    pub fn identifier(self) -> &'static str {
        ICON_NAMES
            .iter()
            .find(|(icon, _)| *icon == self)
            .map(|(_, name)| *name)
            .unwrap_or("FaCode")
    }

    /// Icon for a stored skill; `None` when absent or unknown.
    pub fn resolve(identifier: Option<&str>) -> Option<SkillIcon> {
        identifier.and_then(|name| name.parse().ok())
    }
}

impl FromStr for SkillIcon {
    type Err = UnknownIcon;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ICON_NAMES
            .iter()
            .find(|(_, known)| *known == name)
            .map(|(icon, _)| *icon)
            .ok_or_else(|| UnknownIcon(name.to_string()))
    }
}

impl fmt::Display for SkillIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}
