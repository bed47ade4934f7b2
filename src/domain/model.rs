use serde::{Deserialize, Serialize};
use std::fmt;

/// 天干 — the ten heavenly stems, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

impl Stem {
    pub const COUNT: usize = 10;

    pub const ALL: [Stem; Stem::COUNT] = [
        Stem::Jia,
        Stem::Yi,
        Stem::Bing,
        Stem::Ding,
        Stem::Wu,
        Stem::Ji,
        Stem::Geng,
        Stem::Xin,
        Stem::Ren,
        Stem::Gui,
    ];

    /// Total over any index; callers pass raw cycle arithmetic results.
    pub fn from_index(index: usize) -> Stem {
        Stem::ALL[index % Stem::COUNT]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// 甲乙木 丙丁火 戊己土 庚辛金 壬癸水 — two stems per element.
    pub fn element(self) -> Element {
        Element::ALL[self.index() / 2]
    }

    pub fn glyph(self) -> char {
        match self {
            Stem::Jia => '甲',
            Stem::Yi => '乙',
            Stem::Bing => '丙',
            Stem::Ding => '丁',
            Stem::Wu => '戊',
            Stem::Ji => '己',
            Stem::Geng => '庚',
            Stem::Xin => '辛',
            Stem::Ren => '壬',
            Stem::Gui => '癸',
        }
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// 地支 — the twelve earthly branches, in cycle order. Also used for the
/// two-hour windows of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

impl Branch {
    pub const COUNT: usize = 12;

    pub const ALL: [Branch; Branch::COUNT] = [
        Branch::Zi,
        Branch::Chou,
        Branch::Yin,
        Branch::Mao,
        Branch::Chen,
        Branch::Si,
        Branch::Wu,
        Branch::Wei,
        Branch::Shen,
        Branch::You,
        Branch::Xu,
        Branch::Hai,
    ];

    pub fn from_index(index: usize) -> Branch {
        Branch::ALL[index % Branch::COUNT]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Branch elements are unevenly distributed (earth claims four branches).
    pub fn element(self) -> Element {
        match self {
            Branch::Yin | Branch::Mao => Element::Wood,
            Branch::Si | Branch::Wu => Element::Fire,
            Branch::Chou | Branch::Chen | Branch::Wei | Branch::Xu => Element::Earth,
            Branch::Shen | Branch::You => Element::Metal,
            Branch::Zi | Branch::Hai => Element::Water,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Branch::Zi => '子',
            Branch::Chou => '丑',
            Branch::Yin => '寅',
            Branch::Mao => '卯',
            Branch::Chen => '辰',
            Branch::Si => '巳',
            Branch::Wu => '午',
            Branch::Wei => '未',
            Branch::Shen => '申',
            Branch::You => '酉',
            Branch::Xu => '戌',
            Branch::Hai => '亥',
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// 五行 — declaration order is the production order (相生):
/// wood feeds fire, fire makes earth, earth bears metal, metal carries water,
/// water feeds wood. All relational arithmetic walks this ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    pub const COUNT: usize = 5;

    pub const ALL: [Element; Element::COUNT] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Element::Wood => "Wood",
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Metal => "Metal",
            Element::Water => "Water",
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Element::Wood => '木',
            Element::Fire => '火',
            Element::Earth => '土',
            Element::Metal => '金',
            Element::Water => '水',
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Steps from `from` to `to` along the production ring, in [0, 5).
pub fn cyclic_offset(from: Element, to: Element) -> usize {
    (to.index() + Element::COUNT - from.index()) % Element::COUNT
}

/// The ten categories collapsed to five groups, ordered by production-ring
/// offset from the day master (offset 0 through 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationalGroup {
    Independence,
    Expression,
    Wealth,
    Authority,
    Resource,
}

impl RelationalGroup {
    pub const COUNT: usize = 5;

    pub const ALL: [RelationalGroup; RelationalGroup::COUNT] = [
        RelationalGroup::Independence,
        RelationalGroup::Expression,
        RelationalGroup::Wealth,
        RelationalGroup::Authority,
        RelationalGroup::Resource,
    ];

    pub fn from_offset(offset: usize) -> RelationalGroup {
        RelationalGroup::ALL[offset % RelationalGroup::COUNT]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            RelationalGroup::Independence => "Independence",
            RelationalGroup::Expression => "Expression",
            RelationalGroup::Wealth => "Wealth",
            RelationalGroup::Authority => "Authority",
            RelationalGroup::Resource => "Resource",
        }
    }
}

impl fmt::Display for RelationalGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Western zodiac sign; the secondary, date-only trait axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Raw birth data as supplied by the caller. Hour is optional; without it the
/// hour pillar is skipped and the downstream glyph set shrinks by two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthInfo {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: Option<u32>,
}

impl BirthInfo {
    pub fn new(year: i32, month: u32, day: u32, hour: Option<u32>) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }
}

/// One stem-branch pair; displays as the usual 2-glyph token (e.g. 庚午).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    /// Split a position on the 60-cycle into its stem and branch.
    pub fn from_sexagenary_index(index: usize) -> Pillar {
        Pillar {
            stem: Stem::from_index(index),
            branch: Branch::from_index(index),
        }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem.glyph(), self.branch.glyph())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Option<Pillar>,
}

impl FourPillars {
    /// Pillars actually present, in year/month/day/hour order.
    pub fn iter(&self) -> impl Iterator<Item = &Pillar> {
        [
            Some(&self.year),
            Some(&self.month),
            Some(&self.day),
            self.hour.as_ref(),
        ]
        .into_iter()
        .flatten()
    }
}

/// Per-element glyph counts. Totals 6 without an hour pillar, 8 with one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElementTally {
    counts: [u8; Element::COUNT],
}

impl ElementTally {
    pub fn add(&mut self, element: Element) {
        self.counts[element.index()] += 1;
    }

    pub fn count(&self, element: Element) -> u8 {
        self.counts[element.index()]
    }

    pub fn total(&self) -> u8 {
        self.counts.iter().sum()
    }

    /// (element, count) pairs in canonical element order.
    pub fn entries(&self) -> impl Iterator<Item = (Element, u8)> + '_ {
        Element::ALL.iter().map(move |&e| (e, self.count(e)))
    }

    /// Element with the strictly greatest count; ties resolve to the earlier
    /// element in canonical order (strictly-greater comparison only).
    pub fn dominant(&self) -> Element {
        let mut best = Element::ALL[0];
        for &element in Element::ALL.iter().skip(1) {
            if self.count(element) > self.count(best) {
                best = element;
            }
        }
        best
    }

    /// Element with the strictly smallest count; same tie rule as `dominant`.
    pub fn weakest(&self) -> Element {
        let mut worst = Element::ALL[0];
        for &element in Element::ALL.iter().skip(1) {
            if self.count(element) < self.count(worst) {
                worst = element;
            }
        }
        worst
    }
}

/// Per-group counts from the relational classifier. Totals 5 without an hour
/// pillar, 7 with one (the day stem is never a subject).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RelationCounts {
    counts: [u8; RelationalGroup::COUNT],
}

impl RelationCounts {
    pub fn add(&mut self, group: RelationalGroup) {
        self.counts[group.index()] += 1;
    }

    pub fn count(&self, group: RelationalGroup) -> u8 {
        self.counts[group.index()]
    }

    pub fn total(&self) -> u8 {
        self.counts.iter().sum()
    }

    pub fn entries(&self) -> impl Iterator<Item = (RelationalGroup, u8)> + '_ {
        RelationalGroup::ALL.iter().map(move |&g| (g, self.count(g)))
    }
}

/// The assembled classification record. Built once per `BirthInfo` by
/// `core::engine::classify_birth`; never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthChart {
    pub pillars: FourPillars,
    pub day_master: Stem,
    pub day_master_element: Element,
    pub element_tally: ElementTally,
    pub dominant_element: Element,
    pub weak_element: Element,
    pub day_branch: Branch,
    pub relation_counts: RelationCounts,
    pub zodiac: ZodiacSign,
}
