#![allow(dead_code)]

use tadabor_core::Corpus;

pub const CHAPTERS: &str = r#"[
    {"id": 1, "name": "الفاتحة", "transliteration": "Al-Fatiha"},
    {"id": 2, "name": "البقرة", "transliteration": "Al-Baqara"},
    {"id": 3, "name": "الأنعام", "transliteration": "Al-An'am"},
    {"id": 4, "name": "الإخلاص", "transliteration": "Al-Ikhlas"},
    {"id": 5, "name": "النمل", "transliteration": "An-Naml"},
    {"id": 6, "name": "الواقعة", "transliteration": "Al-Waqi'a"}
]"#;

pub const VERSES: &str = r#"[
    {"id": 0, "verses": [
        {"key": "1-1", "suraid": "1", "verseid": "1", "versetext": "بِسْمِ اللَّهِ الرَّحْمَـٰنِ الرَّحِيمِ"},
        {"key": "1-2", "suraid": "1", "verseid": "2", "versetext": "الْحَمْدُ لِلَّهِ رَبِّ الْعَالَمِينَ"},
        {"key": "1-3", "suraid": "1", "verseid": "3", "versetext": "الرَّحْمَـٰنِ الرَّحِيمِ"},
        {"key": "1-4", "suraid": "1", "verseid": "4", "versetext": "مَالِكِ يَوْمِ الدِّينِ"}
    ]},
    {"id": 1, "verses": [
        {"key": "2-1", "suraid": "2", "verseid": "1", "versetext": "كَتَبَ الْعَبْدُ الْكِتَابَ"},
        {"key": "2-2", "suraid": "2", "verseid": "2", "versetext": "وَالْكِتَابُ هُدًى لِلنَّاسِ"},
        {"key": "2-3", "suraid": "2", "verseid": "3", "versetext": "قَالَ رَبِّ اكْتُبْ لَنَا"},
        {"key": "2-4", "suraid": "2", "verseid": "4", "versetext": "وَعَلَّمَ الْإِنْسَانَ الْقَلَمَ"},
        {"key": "2-5", "suraid": "2", "verseid": "5", "versetext": "الْعِلْمُ نُورٌ"},
        {"key": "2-6", "suraid": "2", "verseid": "6", "versetext": "وَقَالُوا سَمِعْنَا وَأَطَعْنَا"},
        {"key": "2-7", "suraid": "2", "verseid": "7", "versetext": "إِنَّ اللَّهَ سَمِيعٌ عَلِيمٌ"},
        {"key": "2-8", "suraid": "2", "verseid": "8", "versetext": "يَعْلَمُ مَا فِي السَّمَاوَاتِ"},
        {"key": "2-9", "suraid": "2", "verseid": "9", "versetext": "كِتَابٌ مُبِينٌ"},
        {"key": "2-10", "suraid": "2", "verseid": "10", "versetext": "وَكَتَبْنَا لَهُ فِي الْأَلْوَاحِ"}
    ]},
    {"id": 2, "verses": [
        {"key": "3-1", "suraid": "3", "verseid": "1", "versetext": "وَإِذْ قَالَ إِبْرَاهِيمُ لِأَبِيهِ آزَرَ أَتَتَّخِذُ أَصْنَامًا آلِهَةً ۖ إِنِّي أَرَاكَ وَقَوْمَكَ فِي ضَلَالٍ مُّبِينٍ"}
    ]},
    {"id": 3, "verses": [
        {"key": "4-1", "suraid": "4", "verseid": "1", "versetext": "قُلْ هُوَ ٱللَّهُ أَحَدٌ"},
        {"key": "4-2", "suraid": "4", "verseid": "2", "versetext": "ٱللَّهُ ٱلصَّمَدُ"},
        {"key": "4-3", "suraid": "4", "verseid": "3", "versetext": "لَمْ يَلِدْ وَلَمْ يُولَدْ"},
        {"key": "4-4", "suraid": "4", "verseid": "4", "versetext": "وَلَمْ يَكُن لَّهُۥ كُفُوًا أَحَدٌۢ"}
    ]},
    {"id": 4, "verses": [
        {"key": "5-1", "suraid": "5", "verseid": "1", "versetext": "إِنَّهُۥ مِن سُلَيْمَـٰنَ وَإِنَّهُۥ بِسْمِ ٱللَّهِ ٱلرَّحْمَـٰنِ ٱلرَّحِيمِ"}
    ]},
    {"id": 5, "verses": [
        {"key": "6-1", "suraid": "6", "verseid": "1", "versetext": "فَسَبِّحْ بِٱسْمِ رَبِّكَ ٱلْعَظِيمِ"}
    ]}
]"#;

pub const ROOTS: &str = r#"[
    {"id": 1, "name": "آزر", "count": "1", "occurences": ["14:5"]},
    {"id": 2, "name": "كتب", "count": "6", "occurences": ["13:1", "4:1,3", "5:1", "6:3", "12:1"]},
    {"id": 3, "name": "علم", "count": "4", "occurences": ["7:1", "8:1", "10:4", "11:1"]},
    {"id": 4, "name": "سمع", "count": "2", "occurences": ["9:2", "10:3"]},
    {"id": 5, "name": "و", "count": "6", "occurences": ["5:1", "7:1", "9:1,3", "13:1", "14:1"]},
    {"id": 6, "name": "أله", "count": "4", "occurences": ["0:2", "1:2", "10:2", "14:8"]},
    {"id": 7, "name": "رحم", "count": "4", "occurences": ["0:3,4", "2:1,2", "0:4"]}
]"#;

pub fn corpus() -> Corpus {
    init_tracing();
    Corpus::from_json_strs(CHAPTERS, VERSES, ROOTS).expect("fixture corpus loads")
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
