//! Built-in sample catalog and subject directory

use super::{Catalog, CourseRecord, DEFAULT_INSTITUTION};

/// Subject codes offered for autocomplete, with their display names
pub static SUBJECT_DIRECTORY: &[(&str, &str)] = &[
    ("AAAD", "African, African American and Diaspora Studies"),
    ("AMST", "American Studies"),
    ("ANTH", "Anthropology"),
    ("APPL", "Applied Physical Sciences"),
    ("ARAB", "Arabic"),
    ("ARTH", "Art History"),
    ("ARTS", "Studio Art"),
    ("ASTR", "Astronomy"),
    ("BIOL", "Biology"),
    ("BMME", "Biomedical Engineering"),
    ("BUSI", "Business Administration"),
    ("CHEM", "Chemistry"),
    ("CHIN", "Chinese"),
    ("CLAR", "Classical Archaeology"),
    ("CLAS", "Classics"),
    ("COMM", "Communication Studies"),
    ("COMP", "Computer Science"),
    ("DRAM", "Dramatic Art"),
    ("ECON", "Economics"),
    ("EDUC", "Education"),
    ("ENEC", "Environmental Science"),
    ("ENGL", "English"),
    ("ENVR", "Environmental Engineering"),
    ("EXSS", "Exercise and Sport Science"),
    ("FREN", "French"),
    ("GEOG", "Geography"),
    ("GEOL", "Geological Sciences"),
    ("GERM", "German"),
    ("GLBL", "Global Studies"),
    ("HIST", "History"),
    ("HNRS", "Honors"),
    ("INLS", "Information and Library Science"),
    ("ITAL", "Italian"),
    ("JAPN", "Japanese"),
    ("JOMC", "Journalism and Media"),
    ("KOR", "Korean"),
    ("LFIT", "Lifetime Fitness"),
    ("LING", "Linguistics"),
    ("MATH", "Mathematics"),
    ("MUSC", "Music"),
    ("NAVS", "Naval Science"),
    ("NSCI", "Neuroscience"),
    ("NURS", "Nursing"),
    ("PACE", "Professional and Continuing Education"),
    ("PHIL", "Philosophy"),
    ("PHYA", "Physical Activity"),
    ("PHYS", "Physics"),
    ("PLCY", "Public Policy"),
    ("POLI", "Political Science"),
    ("PORT", "Portuguese"),
    ("PSYC", "Psychology"),
    ("PUBL", "Public Health"),
    ("RELI", "Religious Studies"),
    ("RUSS", "Russian"),
    ("SOCI", "Sociology"),
    ("SPAN", "Spanish"),
    ("STOR", "Statistics and Operations Research"),
    ("SWAH", "Swahili"),
    ("WGST", "Women's and Gender Studies"),
];

#[allow(clippy::too_many_arguments)]
fn course(
    id: u32,
    title: &str,
    code: &str,
    professor: Option<&str>,
    rating: f64,
    difficulty: f64,
    workload: f64,
    description: &str,
    reviews: u32,
) -> CourseRecord {
    CourseRecord {
        id,
        title: title.to_string(),
        code: code.to_string(),
        professor: professor.map(str::to_string),
        rating,
        difficulty,
        workload,
        usefulness: None,
        fun: None,
        description: description.to_string(),
        review_count: reviews,
    }
}

pub(super) fn builtin_catalog() -> Catalog {
    let courses = [
        course(20, "AAAD 101", "Intro to African American Studies", None, 4.3, 2.0, 3.0,
            "Introductory survey.", 150),
        course(21, "AAAD 386", "Black Cultures and Digital Media", None, 4.6, 3.0, 3.0,
            "Examines intersection of black cultures and digital technologies.", 80),
        course(10, "COMP 110", "Introduction to Programming", Some("Prof. X"), 4.8, 3.0, 3.0,
            "Fundamentals of programming using a modern language.", 1200),
        course(11, "COMP 301", "Databases", Some("Prof. Y"), 4.2, 4.0, 4.0,
            "Relational models and SQL.", 350),
        course(12, "COMP 401", "Web Programming", Some("Prof. Z"), 4.5, 4.0, 4.0,
            "Client-side and server-side web development.", 600),
        course(13, "MATH 231", "Calculus of One Variable", Some("Prof. A"), 3.9, 4.0, 4.0,
            "Limits, derivatives, and integrals.", 900),
        course(14, "MATH 233", "Calculus of Several Variables", Some("Prof. B"), 4.0, 4.0, 4.0,
            "Multivariable differentiation and integration.", 750),
        course(15, "HIST 128", "US History since 1865", Some("Prof. C"), 4.6, 2.0, 3.0,
            "A survey of American history from the Civil War to the present.", 400),
        course(16, "HIST 250", "Global History", Some("Prof. D"), 4.1, 3.0, 3.0,
            "Themes in world history from ancient times to the present.", 250),
        course(17, "CHEM 101", "General Chemistry I", Some("Prof. E"), 3.5, 5.0, 5.0,
            "Introduction to chemical principles.", 700),
        course(18, "CHEM 261", "Organic Chemistry I", Some("Prof. F"), 3.2, 5.0, 5.0,
            "First course in the study of carbon compounds.", 550),
        course(19, "PSYC 101", "General Psychology", Some("Prof. G"), 4.7, 2.0, 2.0,
            "A survey of the scientific study of behavior and mental processes.", 850),
    ];

    let mut catalog = Catalog::new();
    for c in courses {
        catalog.insert(DEFAULT_INSTITUTION, c);
    }
    catalog
}
