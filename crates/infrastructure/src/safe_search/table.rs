use std::net::IpAddr;
use std::sync::LazyLock;

/// Known hardcoded safe IP for the Yandex family — avoids a resolver round
/// trip entirely.
static YANDEX_SAFE_IP: LazyLock<IpAddr> = LazyLock::new(|| "213.180.193.56".parse().unwrap());

const YANDEX_HOSTS: &[&str] = &["yandex.ru", "yandex.com", "yandex.ua", "yandex.by", "yandex.kz"];

/// ccTLDs Google's forced Safe Search rewrite is known to cover.
const GOOGLE_CCTLDS: &[&str] = &[
    "com", "im", "co.in", "iq", "is", "it", "je", "ac", "ad", "ae", "com.af", "al", "dz", "com.ar",
    "as", "at", "az", "ba", "com.bd", "be", "bf", "bg", "com.bh", "bi", "com.bn", "com.bo",
    "com.br", "bs", "bt", "co.bw", "by", "com.bz", "ca", "cd", "cf", "cg", "ch", "ci", "co.ck",
    "cl", "cm", "cn", "com.co", "co.cr", "com.cu", "cv", "com.cy", "cz", "de", "dj", "dk", "dm",
    "com.do", "com.ec", "ee", "com.eg", "es", "et", "fi", "fm", "fr", "ga", "ge", "gg", "gh", "gi",
    "gl", "gm", "gp", "gr", "com.gt", "gy", "hn", "hr", "ht", "hu", "co.id", "ie", "co.il",
    "com.jm", "jo", "co.jp", "co.ke", "com.kh", "ki", "kg", "co.kr", "com.kw", "kz", "la",
    "com.lb", "li", "lk", "co.ls", "lt", "lu", "lv", "com.ly", "co.ma", "md", "me", "mg", "mk",
    "ml", "com.mm", "mn", "ms", "com.mt", "mu", "mv", "mw", "com.mx", "com.my", "co.mz", "com.na",
    "ne", "com.ng", "com.ni", "nl", "no", "com.np", "nr", "nu", "co.nz", "com.om", "com.pa",
    "com.pe", "com.pg", "com.ph", "com.pk", "pl", "pn", "com.pr", "ps", "pt", "com.py", "com.qa",
    "ro", "ru", "rw", "com.sa", "com.sb", "sc", "se", "com.sg", "sh", "si", "sk", "com.sl", "sn",
    "so", "sm", "sr", "st", "com.sv", "td", "tg", "co.th", "com.tj", "tl", "tm", "tn", "to",
    "com.tr", "tt", "com.tw", "co.tz", "com.ua", "co.ug", "co.uk", "com.uy", "co.uz", "com.vc",
    "co.ve", "vg", "co.vi", "com.vn", "vu", "ws", "rs", "co.za", "co.zm", "co.zw",
];

/// The outcome of matching `host` against the Safe Search rewrite table.
#[derive(Debug, Clone)]
pub enum RewriteTarget {
    /// Return this address directly, without a resolver call.
    StaticIp(IpAddr),
    /// Resolve this canonical hostname via the `Resolver` port.
    Resolve(&'static str),
}

/// Looks up the Safe Search rewrite target for `host`, case-insensitively,
/// ignoring a leading `www.`.
pub fn lookup(host: &str) -> Option<RewriteTarget> {
    let lower = host.to_ascii_lowercase();
    let bare = lower.strip_prefix("www.").unwrap_or(&lower);

    if YANDEX_HOSTS.contains(&bare) {
        return Some(RewriteTarget::StaticIp(*YANDEX_SAFE_IP));
    }

    for cctld in GOOGLE_CCTLDS {
        if bare == format!("google.{cctld}") {
            return Some(RewriteTarget::Resolve("forcesafesearch.google.com"));
        }
    }

    match bare {
        "bing.com" => Some(RewriteTarget::Resolve("strict.bing.com")),
        "duckduckgo.com" => Some(RewriteTarget::Resolve("safe.duckduckgo.com")),
        "youtube.com" => Some(RewriteTarget::Resolve("restrict.youtube.com")),
        _ => None,
    }
}
