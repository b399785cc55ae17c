//! Static gazetteer of Indonesian cities and regencies.
//!
//! Coordinates are city centres, rounded to four decimals. Provincial
//! capitals are flagged; where a province moved its capital the new seat
//! carries the flag.

use crate::{City, CityKind, Zone};
use waktu_types::GeoCoordinate;

#[allow(clippy::too_many_arguments)]
const fn city(
    id: &'static str,
    name: &'static str,
    province: &'static str,
    lat: f64,
    lng: f64,
    zone: Zone,
    kind: CityKind,
    is_capital: bool,
    aliases: &'static [&'static str],
) -> City {
    City {
        id,
        name,
        province,
        coords: GeoCoordinate::new_unchecked(lat, lng),
        zone,
        kind,
        is_capital,
        aliases,
    }
}

pub(crate) const CITIES: &[City] = &[
    city("banda-aceh", "Banda Aceh", "Aceh", 5.5483, 95.3238, Zone::Wib, CityKind::Kota, true, &["aceh"]),
    city("lhokseumawe", "Lhokseumawe", "Aceh", 5.1801, 97.1507, Zone::Wib, CityKind::Kota, false, &[]),
    city("langsa", "Langsa", "Aceh", 4.4683, 97.9681, Zone::Wib, CityKind::Kota, false, &[]),
    city("sabang", "Sabang", "Aceh", 5.8926, 95.3238, Zone::Wib, CityKind::Kota, false, &[]),
    city("meulaboh", "Meulaboh", "Aceh", 4.1363, 96.1286, Zone::Wib, CityKind::Kabupaten, false, &["aceh barat"]),
    city("medan", "Medan", "Sumatera Utara", 3.5952, 98.6722, Zone::Wib, CityKind::Kota, true, &[]),
    city("pematangsiantar", "Pematangsiantar", "Sumatera Utara", 2.9595, 99.0687, Zone::Wib, CityKind::Kota, false, &["siantar", "pematang siantar"]),
    city("binjai", "Binjai", "Sumatera Utara", 3.6001, 98.4854, Zone::Wib, CityKind::Kota, false, &[]),
    city("tebing-tinggi", "Tebing Tinggi", "Sumatera Utara", 3.3285, 99.1625, Zone::Wib, CityKind::Kota, false, &[]),
    city("sibolga", "Sibolga", "Sumatera Utara", 1.7427, 98.7792, Zone::Wib, CityKind::Kota, false, &[]),
    city("padang-sidempuan", "Padang Sidempuan", "Sumatera Utara", 1.3791, 99.2734, Zone::Wib, CityKind::Kota, false, &["padangsidimpuan", "psp"]),
    city("tanjung-balai", "Tanjung Balai", "Sumatera Utara", 2.9667, 99.8000, Zone::Wib, CityKind::Kota, false, &[]),
    city("gunungsitoli", "Gunungsitoli", "Sumatera Utara", 1.2888, 97.6143, Zone::Wib, CityKind::Kota, false, &["nias"]),
    city("padang", "Padang", "Sumatera Barat", -0.9471, 100.4172, Zone::Wib, CityKind::Kota, true, &[]),
    city("bukittinggi", "Bukittinggi", "Sumatera Barat", -0.3056, 100.3692, Zone::Wib, CityKind::Kota, false, &["bukit tinggi"]),
    city("payakumbuh", "Payakumbuh", "Sumatera Barat", -0.2209, 100.6331, Zone::Wib, CityKind::Kota, false, &[]),
    city("solok", "Solok", "Sumatera Barat", -0.7885, 100.6550, Zone::Wib, CityKind::Kota, false, &[]),
    city("pariaman", "Pariaman", "Sumatera Barat", -0.6264, 100.1179, Zone::Wib, CityKind::Kota, false, &[]),
    city("sawahlunto", "Sawahlunto", "Sumatera Barat", -0.6826, 100.7783, Zone::Wib, CityKind::Kota, false, &[]),
    city("pekanbaru", "Pekanbaru", "Riau", 0.5071, 101.4478, Zone::Wib, CityKind::Kota, true, &["pakanbaru"]),
    city("dumai", "Dumai", "Riau", 1.6666, 101.4001, Zone::Wib, CityKind::Kota, false, &[]),
    city("bengkalis", "Bengkalis", "Riau", 1.4716, 102.1070, Zone::Wib, CityKind::Kabupaten, false, &[]),
    city("rengat", "Rengat", "Riau", -0.3760, 102.5450, Zone::Wib, CityKind::Kabupaten, false, &["indragiri hulu"]),
    city("tanjung-pinang", "Tanjung Pinang", "Kepulauan Riau", 0.9186, 104.4554, Zone::Wib, CityKind::Kota, true, &["tanjungpinang"]),
    city("batam", "Batam", "Kepulauan Riau", 1.0456, 104.0305, Zone::Wib, CityKind::Kota, false, &[]),
    city("tanjung-balai-karimun", "Tanjung Balai Karimun", "Kepulauan Riau", 1.0000, 103.4167, Zone::Wib, CityKind::Kabupaten, false, &["karimun"]),
    city("ranai", "Ranai", "Kepulauan Riau", 3.9420, 108.3880, Zone::Wib, CityKind::Kabupaten, false, &["natuna"]),
    city("jambi", "Jambi", "Jambi", -1.6101, 103.6131, Zone::Wib, CityKind::Kota, true, &[]),
    city("sungai-penuh", "Sungai Penuh", "Jambi", -2.0628, 101.3960, Zone::Wib, CityKind::Kota, false, &["kerinci"]),
    city("muara-bungo", "Muara Bungo", "Jambi", -1.4879, 102.1180, Zone::Wib, CityKind::Kabupaten, false, &["bungo"]),
    city("palembang", "Palembang", "Sumatera Selatan", -2.9761, 104.7754, Zone::Wib, CityKind::Kota, true, &["plg"]),
    city("prabumulih", "Prabumulih", "Sumatera Selatan", -3.4320, 104.2350, Zone::Wib, CityKind::Kota, false, &[]),
    city("lubuklinggau", "Lubuklinggau", "Sumatera Selatan", -3.2967, 102.8617, Zone::Wib, CityKind::Kota, false, &["lubuk linggau"]),
    city("pagar-alam", "Pagar Alam", "Sumatera Selatan", -4.0167, 103.2500, Zone::Wib, CityKind::Kota, false, &["pagaralam"]),
    city("lahat", "Lahat", "Sumatera Selatan", -3.7864, 103.5428, Zone::Wib, CityKind::Kabupaten, false, &[]),
    city("baturaja", "Baturaja", "Sumatera Selatan", -4.1300, 104.1667, Zone::Wib, CityKind::Kabupaten, false, &["ogan komering ulu", "oku"]),
    city("pangkal-pinang", "Pangkal Pinang", "Kepulauan Bangka Belitung", -2.1291, 106.1138, Zone::Wib, CityKind::Kota, true, &["pangkalpinang", "bangka"]),
    city("tanjung-pandan", "Tanjung Pandan", "Kepulauan Bangka Belitung", -2.7390, 107.6350, Zone::Wib, CityKind::Kabupaten, false, &["belitung", "tanjungpandan"]),
    city("bengkulu", "Bengkulu", "Bengkulu", -3.8004, 102.2655, Zone::Wib, CityKind::Kota, true, &[]),
    city("curup", "Curup", "Bengkulu", -3.4700, 102.5200, Zone::Wib, CityKind::Kabupaten, false, &["rejang lebong"]),
    city("bandar-lampung", "Bandar Lampung", "Lampung", -5.3971, 105.2668, Zone::Wib, CityKind::Kota, true, &["lampung", "tanjungkarang"]),
    city("metro", "Metro", "Lampung", -5.1131, 105.3067, Zone::Wib, CityKind::Kota, false, &[]),
    city("kotabumi", "Kotabumi", "Lampung", -4.8333, 104.9000, Zone::Wib, CityKind::Kabupaten, false, &["lampung utara"]),
    city("jakarta", "Jakarta", "DKI Jakarta", -6.2088, 106.8456, Zone::Wib, CityKind::Kota, true, &["dki", "dki jakarta", "batavia", "jkt", "jakarta pusat"]),
    city("jakarta-selatan", "Jakarta Selatan", "DKI Jakarta", -6.2615, 106.8106, Zone::Wib, CityKind::Kota, false, &["jaksel"]),
    city("jakarta-timur", "Jakarta Timur", "DKI Jakarta", -6.2250, 106.9004, Zone::Wib, CityKind::Kota, false, &["jaktim"]),
    city("jakarta-barat", "Jakarta Barat", "DKI Jakarta", -6.1674, 106.7637, Zone::Wib, CityKind::Kota, false, &["jakbar"]),
    city("jakarta-utara", "Jakarta Utara", "DKI Jakarta", -6.1384, 106.8827, Zone::Wib, CityKind::Kota, false, &["jakut"]),
    city("serang", "Serang", "Banten", -6.1200, 106.1503, Zone::Wib, CityKind::Kota, true, &[]),
    city("tangerang", "Tangerang", "Banten", -6.1783, 106.6319, Zone::Wib, CityKind::Kota, false, &["tng"]),
    city("tangerang-selatan", "Tangerang Selatan", "Banten", -6.2886, 106.7179, Zone::Wib, CityKind::Kota, false, &["tangsel", "bsd", "bintaro"]),
    city("cilegon", "Cilegon", "Banten", -6.0025, 106.0111, Zone::Wib, CityKind::Kota, false, &[]),
    city("pandeglang", "Pandeglang", "Banten", -6.3086, 106.1067, Zone::Wib, CityKind::Kabupaten, false, &[]),
    city("rangkasbitung", "Rangkasbitung", "Banten", -6.3590, 106.2495, Zone::Wib, CityKind::Kabupaten, false, &["lebak"]),
    city("bandung", "Bandung", "Jawa Barat", -6.9175, 107.6191, Zone::Wib, CityKind::Kota, true, &["bdg", "paris van java"]),
    city("bogor", "Bogor", "Jawa Barat", -6.5950, 106.8167, Zone::Wib, CityKind::Kota, false, &["buitenzorg"]),
    city("depok", "Depok", "Jawa Barat", -6.4025, 106.7942, Zone::Wib, CityKind::Kota, false, &[]),
    city("bekasi", "Bekasi", "Jawa Barat", -6.2383, 106.9756, Zone::Wib, CityKind::Kota, false, &[]),
    city("cimahi", "Cimahi", "Jawa Barat", -6.8722, 107.5425, Zone::Wib, CityKind::Kota, false, &[]),
    city("cirebon", "Cirebon", "Jawa Barat", -6.7063, 108.5570, Zone::Wib, CityKind::Kota, false, &[]),
    city("sukabumi", "Sukabumi", "Jawa Barat", -6.9277, 106.9300, Zone::Wib, CityKind::Kota, false, &[]),
    city("tasikmalaya", "Tasikmalaya", "Jawa Barat", -7.3274, 108.2207, Zone::Wib, CityKind::Kota, false, &["tasik"]),
    city("banjar", "Banjar", "Jawa Barat", -7.3707, 108.5342, Zone::Wib, CityKind::Kota, false, &[]),
    city("garut", "Garut", "Jawa Barat", -7.2279, 107.9087, Zone::Wib, CityKind::Kabupaten, false, &[]),
    city("karawang", "Karawang", "Jawa Barat", -6.3227, 107.3376, Zone::Wib, CityKind::Kabupaten, false, &[]),
    city("purwakarta", "Purwakarta", "Jawa Barat", -6.5569, 107.4431, Zone::Wib, CityKind::Kabupaten, false, &[]),
    city("subang", "Subang", "Jawa Barat", -6.5715, 107.7587, Zone::Wib, CityKind::Kabupaten, false, &[]),
    city("indramayu", "Indramayu", "Jawa Barat", -6.3373, 108.3258, Zone::Wib, CityKind::Kabupaten, false, &[]),
    city("kuningan", "Kuningan", "Jawa Barat", -6.9764, 108.4837, Zone::Wib, CityKind::Kabupaten, false, &[]),
    city("sumedang", "Sumedang", "Jawa Barat", -6.8580, 107.9164, Zone::Wib, CityKind::Kabupaten, false, &[]),
    city("cianjur", "Cianjur", "Jawa Barat", -6.8168, 107.1425, Zone::Wib, CityKind::Kabupaten, false, &[]),
    city("majalengka", "Majalengka", "Jawa Barat", -6.8361, 108.2277, Zone::Wib, CityKind::Kabupaten, false, &[]),
    city("semarang", "Semarang", "Jawa Tengah", -6.9667, 110.4167, Zone::Wib, CityKind::Kota, true, &["smg"]),
    city("surakarta", "Surakarta", "Jawa Tengah", -7.5755, 110.8243, Zone::Wib, CityKind::Kota, false, &["solo"]),
    city("magelang", "Magelang", "Jawa Tengah", -7.4797, 110.2177, Zone::Wib, CityKind::Kota, false, &[]),
    city("salatiga", "Salatiga", "Jawa Tengah", -7.3305, 110.5084, Zone::Wib, CityKind::Kota, false, &[]),
    city("pekalongan", "Pekalongan", "Jawa Tengah", -6.8898, 109.6746, Zone::Wib, CityKind::Kota, false, &[]),
    city("tegal", "Tegal", "Jawa Tengah", -6.8694, 109.1402, Zone::Wib, CityKind::Kota, false, &[]),
    city("purwokerto", "Purwokerto", "Jawa Tengah", -7.4214, 109.2344, Zone::Wib, CityKind::Kabupaten, false, &["banyumas"]),
    city("kudus", "Kudus", "Jawa Tengah", -6.8048, 110.8405, Zone::Wib, CityKind::Kabupaten, false, &[]),
    city("jepara", "Jepara", "Jawa Tengah", -6.5888, 110.6684, Zone::Wib, CityKind::Kabupaten, false, &[]),
    city("cilacap", "Cilacap", "Jawa Tengah", -7.7266, 109.0096, Zone::Wib, CityKind::Kabupaten, false, &[]),
    city("kebumen", "Kebumen", "Jawa Tengah", -7.6681, 109.6525, Zone::Wib, CityKind::Kabupaten, false, &[]),
    city("klaten", "Klaten", "Jawa Tengah", -7.7058, 110.6061, Zone::Wib, CityKind::Kabupaten, false, &[]),
    city("pati", "Pati", "Jawa Tengah", -6.7550, 111.0380, Zone::Wib, CityKind::Kabupaten, false, &[]),
    city("rembang", "Rembang", "Jawa Tengah", -6.7083, 111.3416, Zone::Wib, CityKind::Kabupaten, false, &[]),
    city("brebes", "Brebes", "Jawa Tengah", -6.8720, 109.0418, Zone::Wib, CityKind::Kabupaten, false, &[]),
    city("wonosobo", "Wonosobo", "Jawa Tengah", -7.3632, 109.9002, Zone::Wib, CityKind::Kabupaten, false, &["dieng"]),
    city("yogyakarta", "Yogyakarta", "DI Yogyakarta", -7.7956, 110.3695, Zone::Wib, CityKind::Kota, true, &["jogja", "jogjakarta", "yogya", "jogya", "diy"]),
    city("sleman", "Sleman", "DI Yogyakarta", -7.7167, 110.3553, Zone::Wib, CityKind::Kabupaten, false, &[]),
    city("bantul", "Bantul", "DI Yogyakarta", -7.8881, 110.3289, Zone::Wib, CityKind::Kabupaten, false, &[]),
    city("wonosari", "Wonosari", "DI Yogyakarta", -7.9655, 110.6009, Zone::Wib, CityKind::Kabupaten, false, &["gunungkidul", "gunung kidul"]),
    city("wates", "Wates", "DI Yogyakarta", -7.8574, 110.1590, Zone::Wib, CityKind::Kabupaten, false, &["kulon progo"]),
    city("surabaya", "Surabaya", "Jawa Timur", -7.2575, 112.7521, Zone::Wib, CityKind::Kota, true, &["sby", "suroboyo"]),
    city("malang", "Malang", "Jawa Timur", -7.9666, 112.6326, Zone::Wib, CityKind::Kota, false, &[]),
    city("kediri", "Kediri", "Jawa Timur", -7.8480, 112.0178, Zone::Wib, CityKind::Kota, false, &[]),
    city("blitar", "Blitar", "Jawa Timur", -8.0954, 112.1609, Zone::Wib, CityKind::Kota, false, &[]),
    city("madiun", "Madiun", "Jawa Timur", -7.6298, 111.5239, Zone::Wib, CityKind::Kota, false, &[]),
    city("mojokerto", "Mojokerto", "Jawa Timur", -7.4722, 112.4338, Zone::Wib, CityKind::Kota, false, &[]),
    city("pasuruan", "Pasuruan", "Jawa Timur", -7.6453, 112.9075, Zone::Wib, CityKind::Kota, false, &[]),
    city("probolinggo", "Probolinggo", "Jawa Timur", -7.7543, 113.2159, Zone::Wib, CityKind::Kota, false, &[]),
    city("batu", "Batu", "Jawa Timur", -7.8672, 112.5239, Zone::Wib, CityKind::Kota, false, &[]),
    city("jember", "Jember", "Jawa Timur", -8.1845, 113.6681, Zone::Wib, CityKind::Kabupaten, false, &[]),
    city("banyuwangi", "Banyuwangi", "Jawa Timur", -8.2192, 114.3691, Zone::Wib, CityKind::Kabupaten, false, &[]),
    city("sidoarjo", "Sidoarjo", "Jawa Timur", -7.4478, 112.7183, Zone::Wib, CityKind::Kabupaten, false, &[]),
    city("gresik", "Gresik", "Jawa Timur", -7.1539, 112.6561, Zone::Wib, CityKind::Kabupaten, false, &[]),
    city("lamongan", "Lamongan", "Jawa Timur", -7.1167, 112.4167, Zone::Wib, CityKind::Kabupaten, false, &[]),
    city("tuban", "Tuban", "Jawa Timur", -6.8976, 112.0649, Zone::Wib, CityKind::Kabupaten, false, &[]),
    city("bojonegoro", "Bojonegoro", "Jawa Timur", -7.1502, 111.8817, Zone::Wib, CityKind::Kabupaten, false, &[]),
    city("ponorogo", "Ponorogo", "Jawa Timur", -7.8651, 111.4696, Zone::Wib, CityKind::Kabupaten, false, &[]),
    city("bangkalan", "Bangkalan", "Jawa Timur", -7.0455, 112.7351, Zone::Wib, CityKind::Kabupaten, false, &["madura"]),
    city("sumenep", "Sumenep", "Jawa Timur", -7.0167, 113.8667, Zone::Wib, CityKind::Kabupaten, false, &[]),
    city("situbondo", "Situbondo", "Jawa Timur", -7.7069, 114.0093, Zone::Wib, CityKind::Kabupaten, false, &[]),
    city("denpasar", "Denpasar", "Bali", -8.6705, 115.2126, Zone::Wita, CityKind::Kota, true, &["bali"]),
    city("singaraja", "Singaraja", "Bali", -8.1120, 115.0882, Zone::Wita, CityKind::Kabupaten, false, &["buleleng"]),
    city("gianyar", "Gianyar", "Bali", -8.5441, 115.3254, Zone::Wita, CityKind::Kabupaten, false, &["ubud"]),
    city("tabanan", "Tabanan", "Bali", -8.5413, 115.1250, Zone::Wita, CityKind::Kabupaten, false, &[]),
    city("mangupura", "Mangupura", "Bali", -8.5870, 115.1790, Zone::Wita, CityKind::Kabupaten, false, &["badung", "kuta"]),
    city("mataram", "Mataram", "Nusa Tenggara Barat", -8.5833, 116.1167, Zone::Wita, CityKind::Kota, true, &["lombok", "ntb"]),
    city("bima", "Bima", "Nusa Tenggara Barat", -8.4600, 118.7270, Zone::Wita, CityKind::Kota, false, &[]),
    city("sumbawa-besar", "Sumbawa Besar", "Nusa Tenggara Barat", -8.4932, 117.4200, Zone::Wita, CityKind::Kabupaten, false, &["sumbawa"]),
    city("kupang", "Kupang", "Nusa Tenggara Timur", -10.1772, 123.6070, Zone::Wita, CityKind::Kota, true, &["ntt"]),
    city("ende", "Ende", "Nusa Tenggara Timur", -8.8432, 121.6623, Zone::Wita, CityKind::Kabupaten, false, &["flores"]),
    city("maumere", "Maumere", "Nusa Tenggara Timur", -8.6199, 122.2111, Zone::Wita, CityKind::Kabupaten, false, &["sikka"]),
    city("labuan-bajo", "Labuan Bajo", "Nusa Tenggara Timur", -8.4964, 119.8877, Zone::Wita, CityKind::Kabupaten, false, &["manggarai barat", "komodo"]),
    city("waingapu", "Waingapu", "Nusa Tenggara Timur", -9.6567, 120.2641, Zone::Wita, CityKind::Kabupaten, false, &["sumba", "sumba timur"]),
    city("pontianak", "Pontianak", "Kalimantan Barat", -0.0263, 109.3425, Zone::Wib, CityKind::Kota, true, &["ptk"]),
    city("singkawang", "Singkawang", "Kalimantan Barat", 0.9069, 108.9847, Zone::Wib, CityKind::Kota, false, &[]),
    city("ketapang", "Ketapang", "Kalimantan Barat", -1.8530, 109.9814, Zone::Wib, CityKind::Kabupaten, false, &[]),
    city("sintang", "Sintang", "Kalimantan Barat", 0.0697, 111.4953, Zone::Wib, CityKind::Kabupaten, false, &[]),
    city("palangka-raya", "Palangka Raya", "Kalimantan Tengah", -2.2096, 113.9108, Zone::Wib, CityKind::Kota, true, &["palangkaraya"]),
    city("sampit", "Sampit", "Kalimantan Tengah", -2.5333, 112.9500, Zone::Wib, CityKind::Kabupaten, false, &["kotawaringin timur"]),
    city("pangkalan-bun", "Pangkalan Bun", "Kalimantan Tengah", -2.6833, 111.6167, Zone::Wib, CityKind::Kabupaten, false, &["kotawaringin barat"]),
    city("banjarmasin", "Banjarmasin", "Kalimantan Selatan", -3.3186, 114.5944, Zone::Wita, CityKind::Kota, false, &["bjm"]),
    city("banjarbaru", "Banjarbaru", "Kalimantan Selatan", -3.4572, 114.8103, Zone::Wita, CityKind::Kota, true, &[]),
    city("martapura", "Martapura", "Kalimantan Selatan", -3.4135, 114.8565, Zone::Wita, CityKind::Kabupaten, false, &[]),
    city("samarinda", "Samarinda", "Kalimantan Timur", -0.5022, 117.1536, Zone::Wita, CityKind::Kota, true, &[]),
    city("balikpapan", "Balikpapan", "Kalimantan Timur", -1.2379, 116.8529, Zone::Wita, CityKind::Kota, false, &["bpn"]),
    city("bontang", "Bontang", "Kalimantan Timur", 0.1333, 117.5000, Zone::Wita, CityKind::Kota, false, &[]),
    city("nusantara", "Nusantara", "Kalimantan Timur", -0.9706, 116.7130, Zone::Wita, CityKind::Kabupaten, false, &["ikn", "ibu kota nusantara", "penajam"]),
    city("tanjung-selor", "Tanjung Selor", "Kalimantan Utara", 2.8375, 117.3653, Zone::Wita, CityKind::Kabupaten, true, &["bulungan"]),
    city("tarakan", "Tarakan", "Kalimantan Utara", 3.3000, 117.6333, Zone::Wita, CityKind::Kota, false, &[]),
    city("nunukan", "Nunukan", "Kalimantan Utara", 4.1372, 117.6663, Zone::Wita, CityKind::Kabupaten, false, &[]),
    city("manado", "Manado", "Sulawesi Utara", 1.4748, 124.8421, Zone::Wita, CityKind::Kota, true, &["menado"]),
    city("bitung", "Bitung", "Sulawesi Utara", 1.4404, 125.1217, Zone::Wita, CityKind::Kota, false, &[]),
    city("tomohon", "Tomohon", "Sulawesi Utara", 1.3250, 124.8390, Zone::Wita, CityKind::Kota, false, &[]),
    city("kotamobagu", "Kotamobagu", "Sulawesi Utara", 0.7244, 124.3199, Zone::Wita, CityKind::Kota, false, &[]),
    city("gorontalo", "Gorontalo", "Gorontalo", 0.5435, 123.0568, Zone::Wita, CityKind::Kota, true, &[]),
    city("palu", "Palu", "Sulawesi Tengah", -0.8917, 119.8707, Zone::Wita, CityKind::Kota, true, &[]),
    city("luwuk", "Luwuk", "Sulawesi Tengah", -0.9516, 122.7875, Zone::Wita, CityKind::Kabupaten, false, &["banggai"]),
    city("poso", "Poso", "Sulawesi Tengah", -1.3959, 120.7520, Zone::Wita, CityKind::Kabupaten, false, &[]),
    city("mamuju", "Mamuju", "Sulawesi Barat", -2.6748, 118.8887, Zone::Wita, CityKind::Kabupaten, true, &[]),
    city("majene", "Majene", "Sulawesi Barat", -3.5403, 118.9707, Zone::Wita, CityKind::Kabupaten, false, &[]),
    city("makassar", "Makassar", "Sulawesi Selatan", -5.1477, 119.4327, Zone::Wita, CityKind::Kota, true, &["ujung pandang", "mks"]),
    city("parepare", "Parepare", "Sulawesi Selatan", -4.0135, 119.6255, Zone::Wita, CityKind::Kota, false, &["pare pare"]),
    city("palopo", "Palopo", "Sulawesi Selatan", -2.9925, 120.1969, Zone::Wita, CityKind::Kota, false, &[]),
    city("watampone", "Watampone", "Sulawesi Selatan", -4.5386, 120.3279, Zone::Wita, CityKind::Kabupaten, false, &["bone"]),
    city("bulukumba", "Bulukumba", "Sulawesi Selatan", -5.5577, 120.1953, Zone::Wita, CityKind::Kabupaten, false, &[]),
    city("kendari", "Kendari", "Sulawesi Tenggara", -3.9985, 122.5129, Zone::Wita, CityKind::Kota, true, &[]),
    city("baubau", "Baubau", "Sulawesi Tenggara", -5.4700, 122.6333, Zone::Wita, CityKind::Kota, false, &["bau bau", "buton"]),
    city("ambon", "Ambon", "Maluku", -3.6954, 128.1814, Zone::Wit, CityKind::Kota, true, &[]),
    city("tual", "Tual", "Maluku", -5.6430, 132.7470, Zone::Wit, CityKind::Kota, false, &["kei"]),
    city("masohi", "Masohi", "Maluku", -3.2950, 128.9680, Zone::Wit, CityKind::Kabupaten, false, &["maluku tengah"]),
    city("sofifi", "Sofifi", "Maluku Utara", 0.7333, 127.5667, Zone::Wit, CityKind::Kota, true, &[]),
    city("ternate", "Ternate", "Maluku Utara", 0.7893, 127.3822, Zone::Wit, CityKind::Kota, false, &[]),
    city("tidore", "Tidore", "Maluku Utara", 0.6833, 127.4000, Zone::Wit, CityKind::Kota, false, &["tidore kepulauan"]),
    city("jayapura", "Jayapura", "Papua", -2.5337, 140.7181, Zone::Wit, CityKind::Kota, true, &[]),
    city("sentani", "Sentani", "Papua", -2.5633, 140.5125, Zone::Wit, CityKind::Kabupaten, false, &[]),
    city("biak", "Biak", "Papua", -1.1760, 136.0820, Zone::Wit, CityKind::Kabupaten, false, &["biak numfor"]),
    city("manokwari", "Manokwari", "Papua Barat", -0.8615, 134.0620, Zone::Wit, CityKind::Kabupaten, true, &[]),
    city("fakfak", "Fakfak", "Papua Barat", -2.9250, 132.2960, Zone::Wit, CityKind::Kabupaten, false, &[]),
    city("sorong", "Sorong", "Papua Barat Daya", -0.8762, 131.2558, Zone::Wit, CityKind::Kota, true, &[]),
    city("nabire", "Nabire", "Papua Tengah", -3.3667, 135.4833, Zone::Wit, CityKind::Kabupaten, true, &[]),
    city("timika", "Timika", "Papua Tengah", -4.5460, 136.8880, Zone::Wit, CityKind::Kabupaten, false, &["mimika"]),
    city("wamena", "Wamena", "Papua Pegunungan", -4.0930, 138.9460, Zone::Wit, CityKind::Kabupaten, true, &["jayawijaya"]),
    city("merauke", "Merauke", "Papua Selatan", -8.4932, 140.4018, Zone::Wit, CityKind::Kabupaten, true, &[]),
];

/// Shown before the user types anything.
pub(crate) const POPULAR: &[&str] = &[
    "jakarta",
    "surabaya",
    "bandung",
    "medan",
    "semarang",
    "makassar",
    "palembang",
    "yogyakarta",
    "denpasar",
    "balikpapan",
];
