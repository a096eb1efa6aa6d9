//! Reference animal-identification knowledge base.
//!
//! Fixed configuration data compiled into the crate. The feature numbers
//! are the selection keys hosts show next to each observable feature.

/// Numbered observable features. Keys 4 and 17 share a label.
pub const ANIMAL_FEATURES: &[(&str, &str)] = &[
    ("1", "有毛发"),
    ("2", "产奶"),
    ("3", "有羽毛"),
    ("4", "不会飞"),
    ("5", "会下蛋"),
    ("6", "吃肉"),
    ("7", "有犬齿"),
    ("8", "有爪"),
    ("9", "眼盯前方"),
    ("10", "有蹄"),
    ("11", "反刍"),
    ("12", "黄褐色"),
    ("13", "有斑点"),
    ("14", "有黑色条纹"),
    ("15", "长脖"),
    ("16", "长腿"),
    ("17", "不会飞"),
    ("18", "会游泳"),
    ("19", "黑白二色"),
    ("20", "善飞"),
];

/// Intermediate category facts accepted as premises of new rules.
pub const ANIMAL_CATEGORIES: &[&str] = &["哺乳类", "鸟类", "食肉类", "蹄类"];

/// Terminal outcomes, in the order hosts offer them as backward goals.
pub const ANIMAL_TERMINALS: &[&str] = &["金钱豹", "虎", "斑马", "长颈鹿", "鸵鸟", "企鹅", "信天翁"];

/// Seed rules as `(premises, conclusion)`, in store order.
pub const ANIMAL_RULES: &[(&[&str], &str)] = &[
    (&["有毛发"], "哺乳类"),
    (&["产奶"], "哺乳类"),
    (&["有羽毛"], "鸟类"),
    (&["会下蛋", "不会飞"], "鸟类"),
    (&["哺乳类", "吃肉"], "食肉类"),
    (&["有犬齿", "有爪", "眼盯前方"], "食肉类"),
    (&["哺乳类", "有蹄"], "蹄类"),
    (&["哺乳类", "反刍"], "蹄类"),
    (&["食肉类", "黄褐色", "哺乳类", "有斑点"], "金钱豹"),
    (&["食肉类", "黄褐色", "哺乳类", "有黑色条纹"], "虎"),
    (&["有黑色条纹", "蹄类"], "斑马"),
    (&["有斑点", "蹄类", "长脖", "长腿"], "长颈鹿"),
    (&["鸟类", "不会飞", "长脖", "长腿"], "鸵鸟"),
    (&["鸟类", "不会飞", "会游泳", "黑白二色"], "企鹅"),
    (&["鸟类", "善飞"], "信天翁"),
];
