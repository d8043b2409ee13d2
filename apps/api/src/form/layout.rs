//! Form F-HRM-01-05: the two-page bilingual employment application.
//!
//! Each section is declared as descriptor tables; `page_one` and `page_two`
//! walk down the sheet placing them. Offsets inside a table are relative to
//! the section's top-left corner.

use crate::applications::record::{ApplicationRecord, LanguageRating};
use crate::form::descriptor::{
    Check, CheckSpec, FieldSpec, PageBuilder, RowSpec, Source, TableSpec,
};
use crate::form::{Page, CONTENT_WIDTH, MARGIN, PAGE_HEIGHT, PAGE_WIDTH};

pub const FORM_CODE: &str = "F-HRM-01-05 Rev :02 01/01/67";

const TITLE_SIZE: f32 = 13.5;
const SUBTITLE_SIZE: f32 = 11.5;
const HEADING_SIZE: f32 = 9.5;
const BODY_SIZE: f32 = 9.0;
const SMALL_SIZE: f32 = 7.5;
const QUESTION_SIZE: f32 = 6.5;
const EMPLOYMENT_CELL_SIZE: f32 = 5.5;

const LOGO_WIDTH: f32 = 60.0;
const PHOTO_WIDTH: f32 = 85.0;
const PHOTO_HEIGHT: f32 = 96.0;
const FOOTER_OFFSET: f32 = 25.0;

// ── Page 1 ──────────────────────────────────────────────────────────────────

const POSITION_FIELDS: [FieldSpec; 3] = [
    FieldSpec::fixed(5.0, 2.0, 525.0, "(Please fill in English, if capable)"),
    FieldSpec::labelled(5.0, 10.0, 525.0, "Position Applied ตำแหน่งที่สมัคร : ", "positionApplied"),
    FieldSpec::labelled(5.0, 18.0, 525.0, "Expected Salary เงินเดือนที่คาดหวัง : ", "expectedSalary"),
];

/// Ten lines, 14pt apart, starting 3pt inside the PERSONAL RECORD box.
const PERSONAL_FIELDS: [FieldSpec; 24] = [
    FieldSpec::labelled(3.0, 3.0, 170.0, "ชื่อ : (นาย/นางสาว/นาง) ", "firstNameTh"),
    FieldSpec::labelled(180.0, 3.0, 130.0, "ชื่อเล่น ", "nickname"),
    FieldSpec::labelled(320.0, 3.0, 215.0, "นามสกุล : ", "lastNameTh"),
    FieldSpec::labelled(3.0, 17.0, 310.0, "Name : (Mr./Miss/Mrs.) ", "firstNameEn"),
    FieldSpec::labelled(320.0, 17.0, 215.0, "Last Name : ", "lastNameEn"),
    FieldSpec::labelled(3.0, 31.0, 240.0, "Present Address ที่อยู่ปัจจุบัน : ", "address"),
    FieldSpec::labelled(250.0, 31.0, 85.0, "Moo หมู่ : ", "moo"),
    FieldSpec::labelled(340.0, 31.0, 195.0, "District ตำบล : ", "subDistrict"),
    FieldSpec::labelled(3.0, 45.0, 240.0, "District ซอย/ถ.แขวง : ", "district"),
    FieldSpec::labelled(250.0, 45.0, 285.0, "Province จังหวัด : ", "province"),
    FieldSpec::labelled(3.0, 59.0, 240.0, "Zip Code รหัสไปรษณีย์ : ", "zipCode"),
    FieldSpec::labelled(250.0, 59.0, 285.0, "Mobile Phone โทรศัพท์มือถือ : ", "mobile"),
    FieldSpec::labelled(3.0, 73.0, 532.0, "E mail อีเมล์: ", "email"),
    FieldSpec::labelled(3.0, 87.0, 240.0, "Date of Birth ว/ด/ปี/ เกิด : ", "birthDate"),
    FieldSpec::labelled(250.0, 87.0, 85.0, "Age อายุ : ", "age"),
    FieldSpec::fixed(340.0, 87.0, 195.0, "Years ปี"),
    FieldSpec::labelled(3.0, 101.0, 532.0, "Identification Card No. หมายเลขบัตรประจำตัวประชาชน : ", "idCard"),
    FieldSpec::labelled(3.0, 115.0, 110.0, "Sex เพศ : ", "sex"),
    FieldSpec::labelled(120.0, 115.0, 195.0, "Blood Type กรุ๊ปเลือด : ", "bloodType"),
    FieldSpec::labelled(320.0, 115.0, 215.0, "Religion ศาสนา : ", "religion"),
    FieldSpec::labelled(3.0, 129.0, 90.0, "Height ส่วนสูง : ", "height"),
    FieldSpec::fixed(100.0, 129.0, 145.0, "cm. เซนติเมตร"),
    FieldSpec::labelled(250.0, 129.0, 105.0, "Weight น้ำหนัก : ", "weight"),
    FieldSpec::fixed(360.0, 129.0, 175.0, "kg. กิโลกรัม"),
];

const FAMILY_TABLE: TableSpec = TableSpec {
    widths: &[120.0, 120.0, 60.0, 135.0],
    height: 58.0,
    inset: 3.0,
};

const FAMILY_HEADERS: [&str; 4] = [
    "Name ชื่อ",
    "Relationship ความสัมพันธ์",
    "Age อายุ",
    "Occupation อาชีพ",
];

const FAMILY_RULES: [f32; 3] = [12.0, 24.0, 36.0];

const FAMILY_ROWS: [RowSpec; 3] = [
    RowSpec {
        dy: 14.0,
        key: Some("family1Name"),
        cells: &[
            Source::Field("family1Name"),
            Source::FieldOr("family1Relation", "บิดา"),
            Source::Field("family1Age"),
            Source::Field("family1Occupation"),
        ],
    },
    RowSpec {
        dy: 26.0,
        key: Some("family2Name"),
        cells: &[
            Source::Field("family2Name"),
            Source::FieldOr("family2Relation", "มารดา"),
            Source::Field("family2Age"),
            Source::Field("family2Occupation"),
        ],
    },
    RowSpec {
        dy: 38.0,
        key: Some("family3Name"),
        cells: &[
            Source::Field("family3Name"),
            Source::Field("family3Relation"),
            Source::Field("family3Age"),
            Source::Field("family3Occupation"),
        ],
    },
];

const MARITAL_CHECKS: [CheckSpec; 2] = [
    CheckSpec {
        x: 140.0,
        dy: 3.0,
        check: Check::Equals("maritalStatus", "single"),
    },
    CheckSpec {
        x: 220.0,
        dy: 3.0,
        check: Check::Equals("maritalStatus", "married"),
    },
];

const MARITAL_FIELDS: [FieldSpec; 6] = [
    FieldSpec::fixed(3.0, 3.0, 130.0, "Marital Status สถานภาพสมรส"),
    FieldSpec::fixed(150.0, 3.0, 65.0, "Single โสด"),
    FieldSpec::fixed(230.0, 3.0, 305.0, "Married แต่งงาน"),
    FieldSpec::labelled(3.0, 20.0, 240.0, "Spouse's name ชื่อคู่สมรส : ", "spouseName"),
    FieldSpec::labelled(250.0, 20.0, 285.0, "Occupation อาชีพ : ", "spouseOccupation"),
    FieldSpec::labelled(3.0, 30.0, 532.0, "No. of Children จำนวนบุตร : ", "numberOfChildren"),
];

const EMERGENCY_FIELDS: [FieldSpec; 4] = [
    FieldSpec::labelled(3.0, 3.0, 240.0, "Name ชื่อ : ", "emergencyName"),
    FieldSpec::labelled(250.0, 3.0, 285.0, "Relationship ความสัมพันธ์ : ", "emergencyRelation"),
    FieldSpec::labelled(3.0, 31.0, 532.0, "Address ที่อยู่ : ", "emergencyAddress"),
    FieldSpec::labelled(3.0, 59.0, 532.0, "Mobile Phone โทรศัพท์มือถือ : ", "emergencyPhone"),
];

const EDUCATION_TABLE: TableSpec = TableSpec {
    widths: &[95.0, 50.0, 175.0, 75.0, 40.0],
    height: 128.0,
    inset: 3.0,
};

/// Two-line bilingual column headers; the year column sits 2pt from its rule.
const EDUCATION_HEADERS: [FieldSpec; 10] = [
    FieldSpec::fixed(3.0, 2.0, 89.0, "Degree"),
    FieldSpec::fixed(3.0, 8.0, 89.0, "ระดับการศึกษา"),
    FieldSpec::fixed(97.0, 2.0, 46.0, "Year Graduated"),
    FieldSpec::fixed(97.0, 8.0, 46.0, "ปีที่จบ Year ปี"),
    FieldSpec::fixed(148.0, 2.0, 169.0, "Name of Institution"),
    FieldSpec::fixed(148.0, 8.0, 169.0, "ชื่อสถาบัน"),
    FieldSpec::fixed(323.0, 2.0, 69.0, "Major"),
    FieldSpec::fixed(323.0, 8.0, 69.0, "วิชาเอก"),
    FieldSpec::fixed(398.0, 2.0, 34.0, "GPA"),
    FieldSpec::fixed(398.0, 8.0, 34.0, "เกรดเฉลี่ย"),
];

const TABLE_HEADER_RULE: f32 = 15.0;

/// Degree levels are printed whether or not they are filled in.
const EDUCATION_ROWS: [RowSpec; 5] = [
    RowSpec {
        dy: 17.0,
        key: None,
        cells: &[
            Source::Literal("High School มัธยมศึกษา"),
            Source::Field("highSchoolYear"),
            Source::Field("highSchoolName"),
            Source::Literal(""),
            Source::Field("highSchoolGpa"),
        ],
    },
    RowSpec {
        dy: 28.5,
        key: None,
        cells: &[
            Source::Literal("Diploma อนุปริญญา"),
            Source::Field("diplomaYear"),
            Source::Field("diplomaName"),
            Source::Field("diplomaMajor"),
            Source::Field("diplomaGpa"),
        ],
    },
    RowSpec {
        dy: 40.0,
        key: None,
        cells: &[
            Source::Literal("Bachelor ปริญญาตรี"),
            Source::Field("bachelorYear"),
            Source::Field("bachelorName"),
            Source::Field("bachelorMajor"),
            Source::Field("bachelorGpa"),
        ],
    },
    RowSpec {
        dy: 51.5,
        key: None,
        cells: &[
            Source::Literal("Master ปริญญาโท"),
            Source::Field("masterYear"),
            Source::Field("masterName"),
            Source::Field("masterMajor"),
            Source::Field("masterGpa"),
        ],
    },
    RowSpec {
        dy: 63.0,
        key: None,
        cells: &[
            Source::Literal("Others อื่นๆ"),
            Source::Field("otherYear"),
            Source::Field("otherName"),
            Source::Field("otherMajor"),
            Source::Field("otherGpa"),
        ],
    },
];

// ── Page 2 ──────────────────────────────────────────────────────────────────

const LANGUAGE_HEADERS: [FieldSpec; 5] = [
    FieldSpec::fixed(3.0, 2.0, 80.0, "Foreign Languages"),
    FieldSpec::fixed(90.0, 2.0, 120.0, "Spoken พูด"),
    FieldSpec::fixed(220.0, 2.0, 120.0, "Written เขียน"),
    FieldSpec::fixed(350.0, 2.0, 185.0, "Understand เข้าใจ"),
    FieldSpec::fixed(3.0, 12.0, 80.0, "ภาษาอังกฤษ (English)"),
];

/// Spoken / written / understand groups, each a row of excellent, good, fair.
const LANGUAGE_CHECKS: [CheckSpec; 9] = [
    rating(90.0, "englishSpoken", LanguageRating::Excellent),
    rating(140.0, "englishSpoken", LanguageRating::Good),
    rating(180.0, "englishSpoken", LanguageRating::Fair),
    rating(220.0, "englishWritten", LanguageRating::Excellent),
    rating(270.0, "englishWritten", LanguageRating::Good),
    rating(310.0, "englishWritten", LanguageRating::Fair),
    rating(350.0, "englishUnderstand", LanguageRating::Excellent),
    rating(400.0, "englishUnderstand", LanguageRating::Good),
    rating(450.0, "englishUnderstand", LanguageRating::Fair),
];

const LANGUAGE_LABELS: [FieldSpec; 9] = [
    rating_label(100.0, 35.0, LanguageRating::Excellent),
    rating_label(150.0, 25.0, LanguageRating::Good),
    rating_label(190.0, 25.0, LanguageRating::Fair),
    rating_label(230.0, 35.0, LanguageRating::Excellent),
    rating_label(280.0, 25.0, LanguageRating::Good),
    rating_label(320.0, 25.0, LanguageRating::Fair),
    rating_label(360.0, 35.0, LanguageRating::Excellent),
    rating_label(410.0, 35.0, LanguageRating::Good),
    rating_label(460.0, 75.0, LanguageRating::Fair),
];

const fn rating_label(x: f32, width: f32, rating: LanguageRating) -> FieldSpec {
    FieldSpec::fixed(x, 12.0, width, rating.label())
}

const fn rating(x: f32, field: &'static str, rating: LanguageRating) -> CheckSpec {
    CheckSpec {
        x,
        dy: 12.0,
        check: Check::Rating(field, rating),
    }
}

const SKILL_CHECKS: [CheckSpec; 3] = [
    CheckSpec {
        x: 3.0,
        dy: 28.0,
        check: Check::Set("hasComputer"),
    },
    CheckSpec {
        x: 3.0,
        dy: 38.5,
        check: Check::Set("hasDrivingCar"),
    },
    CheckSpec {
        x: 3.0,
        dy: 49.0,
        check: Check::Set("hasDrivingMotor"),
    },
];

const SKILL_FIELDS: [FieldSpec; 3] = [
    FieldSpec::fixed(12.0, 28.0, 523.0, "Computer คอมพิวเตอร์"),
    FieldSpec::labelled(12.0, 38.5, 523.0, "Driving รถยนต์ : Driver Licence No. ", "carLicenseNo"),
    FieldSpec::labelled(
        12.0,
        49.0,
        523.0,
        "Driving รถจักรยานยนต์ : Driver Licence No. ",
        "motorLicenseNo",
    ),
];

/// One training course printed as `course - institution (year)`.
struct TrainingLine {
    dy: f32,
    course: &'static str,
    institution: &'static str,
    year: &'static str,
}

impl TrainingLine {
    fn resolve(&self, record: &ApplicationRecord) -> Option<String> {
        let course = record.display(self.course);
        if course.is_empty() {
            return None;
        }
        Some(format!(
            "{course} - {} ({})",
            record.display(self.institution),
            record.display(self.year)
        ))
    }
}

const TRAINING_LINES: [TrainingLine; 3] = [
    TrainingLine {
        dy: 3.0,
        course: "training1Course",
        institution: "training1Institution",
        year: "training1Year",
    },
    TrainingLine {
        dy: 12.0,
        course: "training2Course",
        institution: "training2Institution",
        year: "training2Year",
    },
    TrainingLine {
        dy: 21.0,
        course: "training3Course",
        institution: "training3Institution",
        year: "training3Year",
    },
];

const EMPLOYMENT_TABLE: TableSpec = TableSpec {
    widths: &[60.0, 110.0, 60.0, 85.0, 50.0, 80.0],
    height: 68.0,
    inset: 2.0,
};

const EMPLOYMENT_HEADERS: [&str; 6] = [
    "Period Time",
    "List of Company",
    "Position",
    "Responsibilities",
    "Salary",
    "Reason",
];

const EMPLOYMENT_HEADERS_TH: [&str; 6] = [
    "ระยะเวลา",
    "ชื่อสถานประกอบการ",
    "ตำแหน่ง",
    "หน้าที่รับผิดชอบ",
    "เงินเดือน",
    "เหตุผลลาออก",
];

/// Cells are cut to 12/20/12/18/8/12 characters.
const EMPLOYMENT_ROWS: [RowSpec; 3] = [
    RowSpec {
        dy: 17.0,
        key: Some("work1Company"),
        cells: &[
            Source::Truncated("work1Period", 12),
            Source::Truncated("work1Company", 20),
            Source::Truncated("work1Position", 12),
            Source::Truncated("work1Responsibilities", 18),
            Source::Truncated("work1Salary", 8),
            Source::Truncated("work1Reason", 12),
        ],
    },
    RowSpec {
        dy: 31.5,
        key: Some("work2Company"),
        cells: &[
            Source::Truncated("work2Period", 12),
            Source::Truncated("work2Company", 20),
            Source::Truncated("work2Position", 12),
            Source::Truncated("work2Responsibilities", 18),
            Source::Truncated("work2Salary", 8),
            Source::Truncated("work2Reason", 12),
        ],
    },
    RowSpec {
        dy: 46.0,
        key: Some("work3Company"),
        cells: &[
            Source::Truncated("work3Period", 12),
            Source::Truncated("work3Company", 20),
            Source::Truncated("work3Position", 12),
            Source::Truncated("work3Responsibilities", 18),
            Source::Truncated("work3Salary", 8),
            Source::Truncated("work3Reason", 12),
        ],
    },
];

struct Question {
    english: &'static str,
    thai: &'static str,
    field: &'static str,
}

const QUESTIONS: [Question; 7] = [
    Question {
        english: "1. Have you ever applied or worked with I C P Group before?",
        thai: "ท่านเคยสมัครหรือทำงานในกลุ่มบริษัทในเครือ ไอ ซี พี มาก่อนหรือไม่?",
        field: "workedBefore",
    },
    Question {
        english: "2. Do you have any relatives or friends working in I C P Group?",
        thai: "ท่านมีญาติพี่น้องหรือคนรู้จักทำงานในกลุ่มบริษัทในเครือ ไอ ซี พี หรือไม่?",
        field: "hasRelatives",
    },
    Question {
        english: "3. Have you ever been convicted for any crimes?",
        thai: "ท่านเคยถูกตัดสินลงโทษหรือไม่?",
        field: "convicted",
    },
    Question {
        english: "4. Have you ever been seriously ill within the past 5 years?",
        thai: "ในระยะ 5 ปีที่ผ่านมา ท่านเคยป่วยเป็นโรคร้ายแรงหรือไม่?",
        field: "seriousIll",
    },
    Question {
        english: "5. Do you have color blindness?",
        thai: "ท่านมีภาวะตาบอดสีหรือไม่?",
        field: "colorBlind",
    },
    Question {
        english: "6. Are you pregnant at the moment?",
        thai: "ขณะนี้ท่านอยู่ในระหว่างการตั้งครรภ์หรือไม่?",
        field: "pregnant",
    },
    Question {
        english: "7. Have you ever contracted with contagious disease?",
        thai: "ท่านเคยป่วยเป็นโรคติดต่อร้ายแรงมาก่อนหรือไม่?",
        field: "contagious",
    },
];

const QUESTION_LINE: f32 = 9.5;
const QUESTION_GAP: f32 = 10.5;

const DISCLAIMER: [(f32, &str); 3] = [
    (
        0.0,
        "I understand that any falsified statement on this application can be sufficient cause for dismissal if I am employed.",
    ),
    (
        9.5,
        "ข้าพเจ้ายอมรับว่าข้อความใดๆเป็นความจริงทุกประการ การปิดบังความจริงใดๆ จะทำให้ข้าพเจ้าหมดสิทธิ์ในการได้รับการพิจารณาว่าจ้างงาน",
    ),
    (16.0, "หรืออาจถูกปลดออกจากงานในกรณีที่บริษัทฯ ได้ว่าจ้างข้าพเจ้าแล้ว"),
];

// ── Builders ────────────────────────────────────────────────────────────────

/// Lays out both pages of the form for `record`. Missing fields print blank.
pub fn build_form(record: &ApplicationRecord) -> Vec<Page> {
    vec![page_one(record), page_two(record)]
}

fn page_one(record: &ApplicationRecord) -> Page {
    let mut page = PageBuilder::new();
    let m = MARGIN;
    let cw = CONTENT_WIDTH;

    // Header
    page.logo(m, m, LOGO_WIDTH);
    page.heading("EMPLOYMENT APPLICATION", m + 80.0, m, TITLE_SIZE, cw - 160.0);
    page.heading("ใบสมัครงาน", m + 80.0, m + 14.0, SUBTITLE_SIZE, cw - 160.0);

    // Photo placeholder
    page.rect(PAGE_WIDTH - m - PHOTO_WIDTH, m, PHOTO_WIDTH, PHOTO_HEIGHT);
    page.centered("รูปถ่าย 1 นิ้ว", PAGE_WIDTH - m - 83.0, m + 38.0, SMALL_SIZE, 81.0);

    // Position and salary
    let mut y = m + 40.0;
    page.rect(m, y, cw, 28.0);
    page.fields(record, m, y, BODY_SIZE, &POSITION_FIELDS);

    // Staff only
    y += 32.0;
    page.rect(m, y, cw, 14.0);
    page.text("Staff Only สำหรับเจ้าหน้าที่", m + 5.0, y + 3.0, BODY_SIZE);

    // Personal record
    y += 18.0;
    page.heading("PERSONAL RECORD ประวัติส่วนตัว", m, y, HEADING_SIZE, cw);
    page.text("(นักศึกษาฝึกงานกรอกเฉพาะหน้า 1)", PAGE_WIDTH - m - 100.0, y, SMALL_SIZE);
    y += 12.0;
    page.rect(m, y, cw, 145.0);
    page.fields(record, m, y, BODY_SIZE, &PERSONAL_FIELDS);

    // Family record
    y += 150.0;
    page.heading("FAMILY RECORD ประวัติครอบครัว", m, y, HEADING_SIZE, cw);
    page.centered(
        "(Particulard of your parents, brothers & sisters โปรดระบุชื่อบิดา มารดา)",
        m,
        y + 10.0,
        SMALL_SIZE,
        cw,
    );
    y += 18.0;
    page.table_frame(m, y, cw, &FAMILY_TABLE);
    page.table_line(m, y + 2.0, BODY_SIZE, &FAMILY_TABLE, &FAMILY_HEADERS);
    for rule in FAMILY_RULES {
        page.line(m, y + rule, m + cw, y + rule);
    }
    page.table_rows(record, m, y, BODY_SIZE, &FAMILY_TABLE, &FAMILY_ROWS);

    // Marital status (the box overlaps the bottom of the family table on the paper form)
    y += 52.0;
    page.rect(m, y, cw, 60.0);
    page.checks(record, m, y, &MARITAL_CHECKS);
    page.fields(record, m, y, BODY_SIZE, &MARITAL_FIELDS);

    // Emergency contact
    y += 88.0;
    page.heading("EMERGENCY CONTACT บุคคลติดต่อในกรณีฉุกเฉิน", m, y, HEADING_SIZE, cw);
    y += 10.0;
    page.rect(m, y, cw, 90.0);
    page.fields(record, m, y, BODY_SIZE, &EMERGENCY_FIELDS);

    // Educational record
    y += 95.0;
    page.heading("EDUCATIONAL RECORD ประวัติการศึกษา", m, y, HEADING_SIZE, cw);
    y += 10.0;
    page.table_frame(m, y, cw, &EDUCATION_TABLE);
    page.fields(record, m, y, SMALL_SIZE, &EDUCATION_HEADERS);
    page.line(m, y + TABLE_HEADER_RULE, m + cw, y + TABLE_HEADER_RULE);
    page.table_rows(record, m, y, SMALL_SIZE, &EDUCATION_TABLE, &EDUCATION_ROWS);

    footer(&mut page, "1 / 2");
    page.finish()
}

fn page_two(record: &ApplicationRecord) -> Page {
    let mut page = PageBuilder::new();
    let m = MARGIN;
    let cw = CONTENT_WIDTH;

    // Special skill
    let mut y = m;
    page.heading("SPECIAL SKILL ความสามารถพิเศษ", m, y, HEADING_SIZE, cw);
    y += 10.0;
    page.rect(m, y, cw, 68.0);
    page.fields(record, m, y, SMALL_SIZE, &LANGUAGE_HEADERS);
    page.checks(record, m, y, &LANGUAGE_CHECKS);
    page.fields(record, m, y, SMALL_SIZE, &LANGUAGE_LABELS);
    page.checks(record, m, y, &SKILL_CHECKS);
    page.fields(record, m, y, SMALL_SIZE, &SKILL_FIELDS);

    // Professional training
    y += 70.0;
    page.heading("PROFESSIONAL TRAINING ประวัติการฝึกอบรม", m, y, HEADING_SIZE, cw);
    page.centered("(Curriculums หลักสูตร)", m, y + 9.0, SMALL_SIZE, cw);
    y += 18.0;
    page.rect(m, y, cw, 45.0);
    for line in &TRAINING_LINES {
        if let Some(text) = line.resolve(record) {
            page.text_in(text, m + 3.0, y + line.dy, SMALL_SIZE, cw - 6.0);
        }
    }

    // Employment record
    y += 40.0;
    page.heading("EMPLOYMENT RECORD ประวัติการทำงาน", m, y, HEADING_SIZE, cw);
    y += 10.0;
    page.table_frame(m, y, cw, &EMPLOYMENT_TABLE);
    page.table_line(m, y + 2.0, SMALL_SIZE, &EMPLOYMENT_TABLE, &EMPLOYMENT_HEADERS);
    page.table_line(m, y + 8.0, SMALL_SIZE, &EMPLOYMENT_TABLE, &EMPLOYMENT_HEADERS_TH);
    page.line(m, y + TABLE_HEADER_RULE, m + cw, y + TABLE_HEADER_RULE);
    page.table_rows(
        record,
        m,
        y,
        EMPLOYMENT_CELL_SIZE,
        &EMPLOYMENT_TABLE,
        &EMPLOYMENT_ROWS,
    );

    // Other: screening questions
    y += 70.0;
    page.heading("OTHER ข้อมูลด้านอื่น ๆ", m, y, HEADING_SIZE, cw);
    y += 10.0;
    let yes_x = PAGE_WIDTH - m - 60.0;
    let no_x = PAGE_WIDTH - m - 30.0;
    for question in &QUESTIONS {
        page.text_in(question.english, m + 3.0, y, QUESTION_SIZE, PAGE_WIDTH - m - 70.0);
        page.checkbox(yes_x, y, record.equals(question.field, "yes"));
        page.text_in("Yes", yes_x + 8.0, y, QUESTION_SIZE, 20.0);
        page.checkbox(no_x, y, record.equals(question.field, "no"));
        page.text_in("No", no_x + 8.0, y, QUESTION_SIZE, 22.0);
        y += QUESTION_LINE;
        page.text_in(question.thai, m + 3.0, y, QUESTION_SIZE, cw);
        y += QUESTION_GAP;
    }

    // Disclaimer
    y += 3.0;
    for (dy, line) in DISCLAIMER {
        page.text_in(line, m, y + dy, QUESTION_SIZE, cw);
    }

    // Signature
    y += 31.0;
    page.text_in("Signature ลายมือชื่อผู้สมัคร", m + 80.0, y, SMALL_SIZE, 200.0);
    page.text_in(
        format!("Date วัน เดือน ปี {}", record.display("signatureDate")),
        PAGE_WIDTH - m - 120.0,
        y,
        SMALL_SIZE,
        120.0,
    );

    footer(&mut page, "2 / 2");
    page.finish()
}

/// Page number and form code, pinned to the bottom of the sheet.
fn footer(page: &mut PageBuilder, page_number: &str) {
    let y = PAGE_HEIGHT - FOOTER_OFFSET;
    page.centered(page_number, 0.0, y, SMALL_SIZE, PAGE_WIDTH);
    page.text(FORM_CODE, PAGE_WIDTH - MARGIN - 100.0, y, SMALL_SIZE);
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::form::{DrawOp, TextOp, Weight};

    fn record(value: serde_json::Value) -> ApplicationRecord {
        ApplicationRecord::from_value(value)
    }

    fn texts(page: &Page) -> Vec<&str> {
        page.texts().map(|t| t.text.as_str()).collect()
    }

    fn find<'a>(page: &'a Page, prefix: &str) -> &'a TextOp {
        page.find_text(prefix)
            .unwrap_or_else(|| panic!("no text starting with {prefix:?}"))
    }

    #[test]
    fn test_empty_record_has_two_pages_with_static_labels() {
        let pages = build_form(&ApplicationRecord::new());
        assert_eq!(pages.len(), 2);

        let first = texts(&pages[0]);
        for label in [
            "EMPLOYMENT APPLICATION",
            "ใบสมัครงาน",
            "PERSONAL RECORD ประวัติส่วนตัว",
            "FAMILY RECORD ประวัติครอบครัว",
            "EMERGENCY CONTACT บุคคลติดต่อในกรณีฉุกเฉิน",
            "EDUCATIONAL RECORD ประวัติการศึกษา",
            "High School มัธยมศึกษา",
            "Others อื่นๆ",
            "1 / 2",
            FORM_CODE,
        ] {
            assert!(first.contains(&label), "page 1 missing {label:?}");
        }

        let second = texts(&pages[1]);
        for label in [
            "SPECIAL SKILL ความสามารถพิเศษ",
            "PROFESSIONAL TRAINING ประวัติการฝึกอบรม",
            "EMPLOYMENT RECORD ประวัติการทำงาน",
            "OTHER ข้อมูลด้านอื่น ๆ",
            "Signature ลายมือชื่อผู้สมัคร",
            "2 / 2",
            FORM_CODE,
        ] {
            assert!(second.contains(&label), "page 2 missing {label:?}");
        }
    }

    #[test]
    fn test_only_title_and_headings_are_bold() {
        let pages = build_form(&ApplicationRecord::new());
        let bold: Vec<&str> = pages
            .iter()
            .flat_map(|p| p.texts())
            .filter(|t| t.weight == Weight::Bold)
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(
            bold,
            vec![
                "EMPLOYMENT APPLICATION",
                "ใบสมัครงาน",
                "PERSONAL RECORD ประวัติส่วนตัว",
                "FAMILY RECORD ประวัติครอบครัว",
                "EMERGENCY CONTACT บุคคลติดต่อในกรณีฉุกเฉิน",
                "EDUCATIONAL RECORD ประวัติการศึกษา",
                "SPECIAL SKILL ความสามารถพิเศษ",
                "PROFESSIONAL TRAINING ประวัติการฝึกอบรม",
                "EMPLOYMENT RECORD ประวัติการทำงาน",
                "OTHER ข้อมูลด้านอื่น ๆ",
            ]
        );
    }

    #[test]
    fn test_empty_record_keeps_all_rulings() {
        let pages = build_form(&ApplicationRecord::new());
        let rects = |p: &Page| p.ops.iter().filter(|op| matches!(op, DrawOp::Rect { .. })).count();
        let lines = |p: &Page| p.ops.iter().filter(|op| matches!(op, DrawOp::Line { .. })).count();

        // photo, position, staff, personal, family, marital, emergency, education
        assert_eq!(rects(&pages[0]), 8);
        // family: 3 column + 3 row rules; education: 4 column + 1 header rule
        assert_eq!(lines(&pages[0]), 11);
        // skill, training, employment
        assert_eq!(rects(&pages[1]), 3);
        // employment: 5 column rules + 1 header rule
        assert_eq!(lines(&pages[1]), 6);
    }

    #[test]
    fn test_empty_record_draws_blank_labels() {
        let pages = build_form(&ApplicationRecord::new());
        assert_eq!(find(&pages[0], "Age อายุ").text, "Age อายุ : ");
        assert_eq!(find(&pages[1], "Date วัน").text, "Date วัน เดือน ปี ");
        assert!(pages[0].checkboxes().all(|(_, _, checked)| !checked));
        assert!(pages[1].checkboxes().all(|(_, _, checked)| !checked));
    }

    #[test]
    fn test_personal_record_has_ten_lines() {
        let pages = build_form(&ApplicationRecord::new());
        let box_top = MARGIN + 102.0;
        let mut rows: Vec<i32> = pages[0]
            .texts()
            .filter(|t| t.y > box_top && t.y < box_top + 145.0)
            .map(|t| (t.y - box_top).round() as i32)
            .collect();
        rows.sort();
        rows.dedup();
        assert_eq!(rows, vec![3, 17, 31, 45, 59, 73, 87, 101, 115, 129]);
    }

    #[test]
    fn test_field_values_follow_labels() {
        let pages = build_form(&record(json!({
            "firstNameTh": "สมชาย",
            "lastNameEn": "Jaidee",
            "age": 35,
            "positionApplied": "Accountant"
        })));
        assert_eq!(find(&pages[0], "ชื่อ : ").text, "ชื่อ : (นาย/นางสาว/นาง) สมชาย");
        assert_eq!(find(&pages[0], "Last Name").text, "Last Name : Jaidee");
        assert_eq!(find(&pages[0], "Age อายุ").text, "Age อายุ : 35");
        assert_eq!(
            find(&pages[0], "Position Applied").text,
            "Position Applied ตำแหน่งที่สมัคร : Accountant"
        );
    }

    #[test]
    fn test_family_relationship_defaults() {
        let pages = build_form(&record(json!({
            "family1Name": "Somsak",
            "family2Name": "Malee",
            "family3Name": "Nid"
        })));
        let page = &pages[0];
        assert!(page.find_text("บิดา").is_some());
        assert!(page.find_text("มารดา").is_some());
        // the third row has no default relationship
        let third_row_y = find(page, "Nid").y;
        let on_third_row = page.texts().filter(|t| t.y == third_row_y).count();
        assert_eq!(on_third_row, 1);
    }

    #[test]
    fn test_family_row_without_name_is_skipped() {
        let pages = build_form(&record(json!({
            "family1Relation": "uncle",
            "family1Age": 50,
            "family2Name": "Malee",
            "family2Relation": "aunt"
        })));
        let page = &pages[0];
        assert!(page.find_text("uncle").is_none());
        assert!(page.find_text("50").is_none());

        let family_top = MARGIN + 270.0;
        assert_eq!(find(page, "Malee").y, family_top + 26.0);
        assert_eq!(find(page, "aunt").y, family_top + 26.0);
    }

    #[test]
    fn test_training_lines_keep_fixed_positions() {
        let pages = build_form(&record(json!({
            "training1Course": "",
            "training2Course": "Excel",
            "training2Institution": "DBD",
            "training2Year": "2023",
            "training3Course": "First Aid"
        })));
        let page = &pages[1];
        let training_top = MARGIN + 98.0;

        let second = find(page, "Excel");
        assert_eq!(second.text, "Excel - DBD (2023)");
        assert_eq!(second.y, training_top + 12.0);

        let third = find(page, "First Aid");
        assert_eq!(third.text, "First Aid -  ()");
        assert_eq!(third.y, training_top + 21.0);

        assert!(page.texts().all(|t| t.y != training_top + 3.0));
    }

    #[test]
    fn test_employment_cells_are_truncated() {
        let pages = build_form(&record(json!({
            "work1Company": "Siam Cement",
            "work1Responsibilities": "a".repeat(30),
            "work2Company": "PTT",
            "work2Responsibilities": "0123456789"
        })));
        let page = &pages[1];
        assert!(page.texts().any(|t| t.text == format!("{}..", "a".repeat(18))));
        assert!(page.texts().any(|t| t.text == "0123456789"));
        let cell = find(page, "0123456789");
        assert_eq!(cell.size, EMPLOYMENT_CELL_SIZE);
    }

    #[test]
    fn test_employment_row_without_company_is_skipped() {
        let pages = build_form(&record(json!({
            "work1Period": "2019-2020",
            "work2Company": "PTT",
            "work2Period": "2021-2024"
        })));
        let page = &pages[1];
        assert!(page.find_text("2019-2020").is_none());
        let employment_top = MARGIN + 148.0;
        assert_eq!(find(page, "2021-2024").y, employment_top + 31.5);
    }

    #[test]
    fn test_language_ratings_exact_match() {
        let pages = build_form(&record(json!({
            "englishSpoken": "good",
            "englishWritten": "Excellent",
            "englishUnderstand": "fair"
        })));
        let skill_row = MARGIN + 22.0;
        let checked: Vec<f32> = pages[1]
            .checkboxes()
            .filter(|&(_, y, checked)| checked && y == skill_row)
            .map(|(x, _, _)| x - MARGIN)
            .collect();
        // spoken "good" at 140, understand "fair" at 450; "Excellent" is not "excellent"
        assert_eq!(checked, vec![140.0, 450.0]);
    }

    #[test]
    fn test_unset_ratings_leave_grid_unchecked() {
        let pages = build_form(&record(json!({ "englishSpoken": "no" })));
        let skill_row = MARGIN + 22.0;
        let grid: Vec<bool> = pages[1]
            .checkboxes()
            .filter(|&(_, y, _)| y == skill_row)
            .map(|(_, _, checked)| checked)
            .collect();
        assert_eq!(grid.len(), 9);
        assert!(grid.iter().all(|checked| !checked));
    }

    #[test]
    fn test_screening_questions_check_yes_or_no() {
        let pages = build_form(&record(json!({
            "workedBefore": "yes",
            "convicted": "no",
            "pregnant": "maybe"
        })));
        let page = &pages[1];
        let yes_x = PAGE_WIDTH - MARGIN - 60.0;
        let no_x = PAGE_WIDTH - MARGIN - 30.0;
        let first_q = find(page, "1. Have you").y;
        let third_q = find(page, "3. Have you").y;
        let sixth_q = find(page, "6. Are you").y;

        let state = |x: f32, y: f32| {
            page.checkboxes()
                .find(|&(cx, cy, _)| cx == x && cy == y)
                .map(|(_, _, checked)| checked)
                .unwrap()
        };
        assert!(state(yes_x, first_q));
        assert!(!state(no_x, first_q));
        assert!(!state(yes_x, third_q));
        assert!(state(no_x, third_q));
        assert!(!state(yes_x, sixth_q));
        assert!(!state(no_x, sixth_q));
        assert_eq!(third_q - first_q, 40.0);
    }

    #[test]
    fn test_marital_and_skill_checks() {
        let pages = build_form(&record(json!({
            "maritalStatus": "married",
            "hasComputer": true,
            "hasDrivingCar": "",
            "hasDrivingMotor": "yes",
            "motorLicenseNo": "M-123"
        })));
        let checked_first: Vec<f32> = pages[0]
            .checkboxes()
            .filter(|c| c.2)
            .map(|(x, _, _)| x - MARGIN)
            .collect();
        assert_eq!(checked_first, vec![220.0]);

        let checked_skills = pages[1]
            .checkboxes()
            .filter(|&(x, _, checked)| checked && x == MARGIN + 3.0)
            .count();
        assert_eq!(checked_skills, 2);
        assert!(pages[1].find_text("Driving รถจักรยานยนต์ : Driver Licence No. M-123").is_some());
    }

    #[test]
    fn test_footer_is_pinned_to_page_bottom() {
        for (page, number) in build_form(&ApplicationRecord::new()).iter().zip(["1 / 2", "2 / 2"]) {
            let footer = find(page, number);
            assert_eq!(footer.y, PAGE_HEIGHT - FOOTER_OFFSET);
            assert_eq!(footer.width, Some(PAGE_WIDTH));
            assert_eq!(find(page, "F-HRM").x, PAGE_WIDTH - MARGIN - 100.0);
        }
    }

    #[test]
    fn test_education_rows_always_printed() {
        let pages = build_form(&record(json!({ "bachelorName": "Chulalongkorn University" })));
        let page = &pages[0];
        let bachelor = find(page, "Bachelor");
        let university = find(page, "Chulalongkorn");
        assert_eq!(bachelor.y, university.y);
        assert_eq!(university.x, MARGIN + 95.0 + 50.0 + 3.0);
    }
}
