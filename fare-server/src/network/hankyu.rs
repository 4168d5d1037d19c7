//! The built-in Hankyu network topology.
//!
//! Station names and adjacency are fixed; distances come from the loaded
//! distance table when the graph is built.

use crate::domain::Station;

/// Every station on the network, grouped by line.
#[rustfmt::skip]
pub const STATIONS: &[&str] = &[
    // Kobe main line
    "大阪梅田", "中津", "十三", "神崎川", "園田", "塚口", "武庫之荘", "西宮北口", "夙川",
    "芦屋川", "岡本", "御影", "六甲", "王子公園", "春日野道", "神戸三宮",
    // Takarazuka main line
    "三国", "庄内", "服部天神", "曽根", "岡町", "豊中", "蛍池", "石橋阪大前", "池田",
    "川西能勢口", "雲雀丘花屋敷", "山本", "中山観音", "売布神社", "清荒神", "宝塚",
    // Minoo line
    "桜井", "牧落", "箕面",
    // Kyoto main line
    "南方", "崇禅寺", "淡路", "上新庄", "相川", "正雀", "摂津市", "南茨木", "茨木市",
    "総持寺", "富田", "高槻市", "上牧", "水無瀬", "大山崎", "長岡天神",
    "西山天王山", "桂", "西京極", "西院", "大宮", "烏丸", "京都河原町",
    // Senri line
    "天神橋筋六丁目", "柴島", "下新庄", "吹田", "豊津", "江坂",
    "南千里", "千里山", "関大前", "北千里",
    // Imazu line
    "宝塚南口", "逆瀬川", "小林", "仁川", "甲東園", "門戸厄神", "阪神国道", "今津",
    // Itami line
    "稲野", "新伊丹", "伊丹",
    // Koyo line
    "苦楽園口", "甲陽園",
    // Arashiyama line
    "上桂", "松尾大社", "嵐山",
];

/// Adjacent station pairs, one entry per track segment.
#[rustfmt::skip]
pub const EDGES: &[(&str, &str)] = &[
    ("大阪梅田", "中津"), ("中津", "十三"),
    ("十三", "神崎川"), ("神崎川", "園田"), ("園田", "塚口"),
    ("塚口", "武庫之荘"), ("武庫之荘", "西宮北口"), ("西宮北口", "夙川"),
    ("夙川", "芦屋川"), ("芦屋川", "岡本"), ("岡本", "御影"), ("御影", "六甲"),
    ("六甲", "王子公園"), ("王子公園", "春日野道"), ("春日野道", "神戸三宮"),

    ("十三", "三国"), ("三国", "庄内"), ("庄内", "服部天神"), ("服部天神", "曽根"),
    ("曽根", "岡町"), ("岡町", "豊中"), ("豊中", "蛍池"), ("蛍池", "石橋阪大前"),
    ("石橋阪大前", "池田"), ("池田", "川西能勢口"), ("川西能勢口", "雲雀丘花屋敷"),
    ("雲雀丘花屋敷", "山本"), ("山本", "中山観音"), ("中山観音", "売布神社"),
    ("売布神社", "清荒神"), ("清荒神", "宝塚"),

    ("石橋阪大前", "桜井"), ("桜井", "牧落"), ("牧落", "箕面"),

    ("十三", "南方"), ("南方", "崇禅寺"), ("崇禅寺", "淡路"),
    ("淡路", "上新庄"), ("上新庄", "相川"), ("相川", "正雀"), ("正雀", "摂津市"),
    ("摂津市", "南茨木"), ("南茨木", "茨木市"), ("茨木市", "総持寺"),
    ("総持寺", "富田"), ("富田", "高槻市"), ("高槻市", "上牧"),
    ("上牧", "水無瀬"), ("水無瀬", "大山崎"), ("大山崎", "長岡天神"),
    ("長岡天神", "西山天王山"), ("西山天王山", "桂"),
    ("桂", "西京極"), ("西京極", "西院"), ("西院", "大宮"), ("大宮", "烏丸"),
    ("烏丸", "京都河原町"),

    ("天神橋筋六丁目", "柴島"), ("柴島", "淡路"), ("淡路", "下新庄"),
    ("下新庄", "吹田"), ("吹田", "豊津"), ("豊津", "江坂"),
    ("江坂", "南千里"), ("南千里", "千里山"), ("千里山", "関大前"), ("関大前", "北千里"),

    ("宝塚", "宝塚南口"), ("宝塚南口", "逆瀬川"), ("逆瀬川", "小林"),
    ("小林", "仁川"), ("仁川", "甲東園"), ("甲東園", "門戸厄神"),
    ("門戸厄神", "西宮北口"), ("西宮北口", "阪神国道"), ("阪神国道", "今津"),

    ("塚口", "稲野"), ("稲野", "新伊丹"), ("新伊丹", "伊丹"),

    ("西宮北口", "苦楽園口"), ("苦楽園口", "甲陽園"),

    ("桂", "上桂"), ("上桂", "松尾大社"), ("松尾大社", "嵐山"),
];

/// The station universe as [`Station`] values, in declaration order.
pub fn stations() -> Vec<Station> {
    STATIONS
        .iter()
        .filter_map(|name| Station::parse(name).ok())
        .collect()
}

/// The adjacency list as [`Station`] pairs, in declaration order.
pub fn edges() -> Vec<(Station, Station)> {
    EDGES
        .iter()
        .filter_map(|(a, b)| Some((Station::parse(a).ok()?, Station::parse(b).ok()?)))
        .collect()
}
