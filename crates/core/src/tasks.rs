//! Task selection and color management
//!
//! A [`TaskSelection`] records which maintenance tasks were requested. Tasks
//! always come back out in the fixed [`Task`] order, whatever order the
//! caller set them in.

use std::fmt;

use colored::Color;

/// One maintenance task. Variant order is execution order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Task {
    Version(String),
    Publish,
    Build,
    Test,
    Clean,
    Doc,
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Task::Version(version) => write!(f, "version {}", version),
            Task::Publish => write!(f, "publish"),
            Task::Build => write!(f, "build"),
            Task::Test => write!(f, "test"),
            Task::Clean => write!(f, "clean"),
            Task::Doc => write!(f, "doc"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskSelection {
    pub version: Option<String>,
    pub publish: bool,
    pub build: bool,
    pub test: bool,
    pub clean: bool,
    pub doc: bool,
}

impl TaskSelection {
    /// Selected tasks in execution order. An empty version string does not
    /// select version stamping.
    pub fn tasks(&self) -> Vec<Task> {
        let mut tasks = Vec::new();
        if let Some(version) = self.version.as_deref().filter(|v| !v.is_empty()) {
            tasks.push(Task::Version(version.to_string()));
        }
        if self.publish {
            tasks.push(Task::Publish);
        }
        if self.build {
            tasks.push(Task::Build);
        }
        if self.test {
            tasks.push(Task::Test);
        }
        if self.clean {
            tasks.push(Task::Clean);
        }
        if self.doc {
            tasks.push(Task::Doc);
        }
        tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks().is_empty()
    }
}

impl FromIterator<Task> for TaskSelection {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        let mut selection = TaskSelection::default();
        for task in iter {
            match task {
                Task::Version(version) => selection.version = Some(version),
                Task::Publish => selection.publish = true,
                Task::Build => selection.build = true,
                Task::Test => selection.test = true,
                Task::Clean => selection.clean = true,
                Task::Doc => selection.doc = true,
            }
        }
        selection
    }
}

/// Get a consistent color for a package name
pub fn get_package_color(package_name: &str) -> Color {
    let hash = package_name
        .bytes()
        .fold(0u64, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u64));

    // Label colors, kept away from the red/yellow/green used for status
    let colors = [
        Color::TrueColor {
            r: 147,
            g: 112,
            b: 219,
        },
        Color::TrueColor {
            r: 64,
            g: 224,
            b: 208,
        },
        Color::TrueColor {
            r: 255,
            g: 140,
            b: 0,
        },
        Color::TrueColor {
            r: 199,
            g: 21,
            b: 133,
        },
        Color::TrueColor {
            r: 72,
            g: 209,
            b: 204,
        },
        Color::TrueColor {
            r: 138,
            g: 43,
            b: 226,
        },
    ];

    colors[(hash % colors.len() as u64) as usize]
}
