//! The static command table.
//!
//! Every command the terminal understands maps to a [`CommandAction`]: a
//! fixed block of portfolio text, the clear action, or the exit action.
//! The table is built once at startup and never mutated. Lookup is
//! case-insensitive on the command name; matching is exact equality only,
//! with no argument parsing.

/// What a command does when resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandAction {
    /// Print a fixed multi-line text block.
    StaticText(String),
    /// Replace the transcript with a single "Terminal cleared." line.
    Clear,
    /// Print the session-terminated text. The terminal keeps running.
    Exit(String),
}

/// Immutable mapping from command name to action.
///
/// Entries keep their declaration order so the help banner and completion
/// candidates come out in a stable, intentional order.
pub struct CommandTable {
    entries: Vec<(&'static str, CommandAction)>,
}

const HELP_TEXT: &str = "Available commands:
about            - Learn about me
experience       - My work experience
projects         - View my projects
education        - My educational background
achievements     - View my awards & certificates
extra-curricular - My activities and leadership roles
contact          - How to reach me
clear            - Clear the terminal
exit             - Close terminal session

Type any command to continue...";

const ABOUT_TEXT: &str = "Personal Profile:
================

Penultimate-year BSc Computer Science student with hands-on experience in data
analysis using Python, SQL, and Excel.

Applied data cleaning, transformation, and visualization techniques in academic
and personal projects to support evidence-based insights.

Proficient in tools such as Pandas, Matplotlib, NumPy, and Amazon QuickSight.

Strong attention to detail, analytical thinking, and ability to work independently
in remote and team-based environments.

Current Status: First Year Average Score: 76.31%
Location: Currently Bradford-based but flexible on location";

const EXPERIENCE_TEXT: &str = "Employment & Volunteer Work Experience:
========================================

[1] Student Ambassador                                    Nov 2024 - Current
    University of Bradford
    ────────────────────────────────────────────────────────────────
    • Guided 100+ visitors per event, ensuring welcoming experience
    • Demonstrated flexibility during open days and HE fairs
    • Engaged with young students in group projects
    • Facilitated productivity by encouraging collaboration

[2] Sales Assistant Volunteer                           Jun 2024 - Aug 2024
    Cancer Research UK Shop, Bradford
    ────────────────────────────────────────────────────────────────
    • Processed 150+ transactions and assisted 400+ customers
    • Organized and replenished stock, handling 100+ items per shift
    • Maintained displays and shop presentation standards
    • Collaborated with 10+ volunteers for operations and fundraising";

const PROJECTS_TEXT: &str = "University & Individual Projects:
=================================

[1] YHROCU - Workflow Management System (2nd Year Group Project)
    ──────────────────────────────────────────────────────────────
    • Developed CRUD system for managing users in workflow management
    • Utilized Laravel and PHP for robust backend functionality
    • Enhanced user experience and operational efficiency for client
    • Coordinated with team to meet client deadlines

[2] Predictive ML Models for Disease Detection (2nd Year Project)
    ──────────────────────────────────────────────────────────────
    • Comprehensive data cleaning, augmentation and feature engineering
    • Used Pandas and NumPy for dataset preparation
    • Trained Random Forest, Decision Tree and CNN algorithms
    • Applied Scikit-learn and TensorFlow for model development
    • Conducted hyperparameter tuning with GridSearchCV

[3] Data Visualization with Amazon QuickSight (Individual Project)
    ──────────────────────────────────────────────────────────────
    • Uploaded large Netflix datasets to Amazon S3
    • Connected datasets to QuickSight for actionable insights
    • Created donut charts, bar graphs, and tables
    • Guided strategic decision making through visualizations

[4] Website Hosting on Amazon S3 (Individual Project)
    ──────────────────────────────────────────────────────────────
    • Created and configured S3 bucket with ACLs and versioning
    • Uploaded HTML, CSS, and JavaScript content
    • Managed public access settings and website visibility
    • Deep dive into static website functionality";

const EDUCATION_TEXT: &str = "Education and Qualifications:
============================

[1] University of Bradford                              Jan 2024 - May 2026
    BSc (Hons) Computer Science with International Year 1
    First Year Average Score: 76.31%
    ──────────────────────────────────────────────────────────────
    Key Modules Year 2:
    • Enterprise Pro: Combined transferable and technical skills
    • Contributed to multiple aspects of SDLC
    • Coordinated with team to meet client deadlines

    Key Modules Year 1:
    • Database Systems: Mastered comprehensive SQL query principles
    • Analyzed large-scale datasets through complex queries

[2] Halkali Toplu Konut Multi-Program Anatolian High School, Turkey
    Sep 2012 - May 2018
    Overall Grade: 86.56%
    ──────────────────────────────────────────────────────────────
    Subject Breakdown:
    • Mathematics: 94%
    • Sciences: 90.60%
    • Visual Arts/Music: 98.25%

    Additional Experience:
    • Teaching Assistant: Helped 50+ Year 11 students with mathematics
    • Developed creative thinking skills through multiple explanation methods";

const ACHIEVEMENTS_TEXT: &str = "Awards & Certificates:
=====================

[1] Winner of BRADHACK 12-Hours Hackathon                        Apr 2025
    PYSOC & AAIS – University of Bradford
    ──────────────────────────────────────────────────────────────
    • Built gamified learning project using Python
    • Developed math calculation game for young students
    • Added player levels and live limitations for accuracy
    • Implemented retro game sound effects

[2] Kickstart Level 1 for Student Representative Recognition
    ──────────────────────────────────────────────────────────────
    • Recognition for outstanding student leadership
    • Demonstrated commitment to student community

[3] AWS Cloud Practitioner Essentials
    ──────────────────────────────────────────────────────────────
    • Comprehensive understanding of AWS cloud services
    • Foundation in cloud computing concepts

[4] AWS Technical Essentials
    ──────────────────────────────────────────────────────────────
    • Technical knowledge of AWS infrastructure
    • Hands-on experience with cloud technologies

Academic Excellence:
• First Year Average: 76.31% (First Class Honours track)
• Subject Excellence: Mathematics (94%), Sciences (90.60%)
• Visual Arts/Music (98.25%)";

const EXTRA_CURRICULAR_TEXT: &str = "Extra-Curricular Activities:
===========================

[1] BRADHACK Hackathon Winner                                    Apr 2025
    PYSOC & AAIS – University of Bradford
    ──────────────────────────────────────────────────────────────
    • Led team to victory in 12-hour coding competition
    • Built gamified learning project using Python game frameworks
    • Developed educational game for faster math calculations
    • Added retro sound effects for nostalgic user experience
    • Implemented player levels and live limitations

[2] Student Representative                                Oct 2024 - Current
    University of Bradford Students Union
    ──────────────────────────────────────────────────────────────
    • Represent over 200 Computer Science students
    • Act as liaison between students and faculty
    • Achieved 20% improvement in response time to student queries
    • Collaborated with university committees on curriculum concerns
    • Resulted in 15% increase in student satisfaction

[3] Teaching Assistant                                    Sep 2012 - May 2018
    High School Mathematics
    ──────────────────────────────────────────────────────────────
    • Helped over 50 Year 11 students with mathematics homework
    • Developed multiple explanation methods for complex concepts
    • Gained creative thinking and mentoring skills

Community Involvement:
• Active member of PYSOC (Python Society)
• Participant in AAIS activities
• Volunteer work with Cancer Research UK";

const CONTACT_TEXT: &str = "Contact Information:
===================

Personal Details:
─────────────────
Name:     Radin Mokari
Phone:    07867 913 661
Email:    radinmokariii@gmail.com
Location: Currently Bradford-based but flexible on location

Professional Links:
───────────────────
LinkedIn: www.linkedin.com/in/radin-mokari
GitHub:   https://github.com/Radin-Mokari

I'm always open to discussing:
• Data analysis and machine learning opportunities
• Software development projects
• Academic collaborations
• Internship and graduate opportunities
• Tech meetups and hackathons

References:
───────────
[1] Raizana Razeen, Education Officer
    Email: f.r.m.razeen@bradford.ac.uk

[2] Dr. Behruz Khaghani, Lecturer in Biomedical Engineering
    Email: s.khaghani@bradford.ac.uk

Feel free to reach out for networking, project collaborations,
or just to chat about technology and data science!";

impl CommandTable {
    /// Build the table. The exit text embeds the configured identity, so
    /// the table is constructed after config is resolved.
    pub fn new(username: &str, hostname: &str) -> Self {
        let exit_text = format!(
            "Session terminated.\n\nThank you for exploring my portfolio!\n\nConnection to {}@{} closed.",
            username, hostname
        );

        let entries = vec![
            ("help", CommandAction::StaticText(HELP_TEXT.to_string())),
            ("about", CommandAction::StaticText(ABOUT_TEXT.to_string())),
            (
                "experience",
                CommandAction::StaticText(EXPERIENCE_TEXT.to_string()),
            ),
            (
                "projects",
                CommandAction::StaticText(PROJECTS_TEXT.to_string()),
            ),
            (
                "education",
                CommandAction::StaticText(EDUCATION_TEXT.to_string()),
            ),
            (
                "achievements",
                CommandAction::StaticText(ACHIEVEMENTS_TEXT.to_string()),
            ),
            (
                "extra-curricular",
                CommandAction::StaticText(EXTRA_CURRICULAR_TEXT.to_string()),
            ),
            (
                "contact",
                CommandAction::StaticText(CONTACT_TEXT.to_string()),
            ),
            ("clear", CommandAction::Clear),
            ("exit", CommandAction::Exit(exit_text)),
        ];

        Self { entries }
    }

    /// Look up a command by name (case-insensitive, exact match).
    pub fn lookup(&self, name: &str) -> Option<&CommandAction> {
        self.entries
            .iter()
            .find(|(cmd, _)| cmd.eq_ignore_ascii_case(name))
            .map(|(_, action)| action)
    }

    /// Command names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(cmd, _)| *cmd)
    }

    /// Completion candidates: command names starting with `prefix`
    /// (already lowercased by the caller). `clear` is never offered.
    pub fn completions(&self, prefix: &str) -> Vec<&'static str> {
        self.entries
            .iter()
            .map(|(cmd, _)| *cmd)
            .filter(|cmd| *cmd != "clear" && cmd.starts_with(prefix))
            .collect()
    }

    /// Number of commands in the table.
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty (it never is in practice).
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CommandTable {
        CommandTable::new("radin", "portfolio")
    }

    #[test]
    fn test_table_contents() {
        let t = table();
        let names: Vec<_> = t.names().collect();
        assert_eq!(
            names,
            vec![
                "help",
                "about",
                "experience",
                "projects",
                "education",
                "achievements",
                "extra-curricular",
                "contact",
                "clear",
                "exit",
            ]
        );
        assert_eq!(t.len(), 10);
        assert!(!t.is_empty());
    }

    #[test]
    fn test_lookup_case_insensitive() {
        let t = table();
        assert_eq!(t.lookup("help"), t.lookup("HELP"));
        assert_eq!(t.lookup("Extra-Curricular"), t.lookup("extra-curricular"));
        assert!(t.lookup("foobar").is_none());
    }

    #[test]
    fn test_clear_is_tagged_action() {
        let t = table();
        assert_eq!(t.lookup("clear"), Some(&CommandAction::Clear));
    }

    #[test]
    fn test_exit_carries_literal_output_text() {
        let t = table();
        match t.lookup("exit") {
            Some(CommandAction::Exit(text)) => {
                assert!(text.starts_with("Session terminated."));
                assert!(text.contains("Connection to radin@portfolio closed."));
            }
            other => panic!("unexpected exit action: {:?}", other),
        }
    }

    #[test]
    fn test_completions_exclude_clear() {
        let t = table();
        assert_eq!(t.completions("ab"), vec!["about"]);
        assert_eq!(t.completions("cl"), Vec::<&str>::new());
        // "e" is ambiguous: experience, education, exit
        assert_eq!(t.completions("e"), vec!["experience", "education", "exit"]);
        // empty prefix offers everything except clear
        assert_eq!(t.completions("").len(), t.len() - 1);
    }

    #[test]
    fn test_help_lists_every_command() {
        let t = table();
        let help = match t.lookup("help") {
            Some(CommandAction::StaticText(text)) => text.clone(),
            other => panic!("unexpected help action: {:?}", other),
        };
        for name in t.names() {
            if name != "help" {
                assert!(help.contains(name), "help text missing {}", name);
            }
        }
    }
}
