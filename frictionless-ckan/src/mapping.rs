//! Static field tables shared by the resource and package converters.

/// Frictionless resource field -> CKAN resource field.
pub const RESOURCE_MAPPING: &[(&str, &str)] = &[
    ("bytes", "size"),
    ("mediatype", "mimetype"),
    ("path", "url"),
];

/// Frictionless package field -> CKAN package field.
pub const PACKAGE_MAPPING: &[(&str, &str)] = &[
    ("description", "notes"),
    ("homepage", "url"),
];

/// Fields native to the core CKAN package schema.
///
/// Any package field outside this set (and outside
/// [`SITE_PACKAGE_KEYS`] and [`EXCLUDED_PACKAGE_KEYS`]) is moved into
/// `extras`.
pub const CKAN_PACKAGE_KEYS: &[&str] = &[
    "author",
    "author_email",
    "creator_user_id",
    "groups",
    "id",
    "license_id",
    "license_title",
    "license_url",
    "maintainer",
    "maintainer_email",
    "metadata_created",
    "metadata_modified",
    "name",
    "notes",
    "owner_org",
    "private",
    "relationships_as_object",
    "relationships_as_subject",
    "revision_id",
    "resources",
    "state",
    "tags",
    "tracking_summary",
    "title",
    "type",
    "url",
    "version",
];

/// Package fields added by the ckanext schema of the statistics portal
/// this mapper is deployed against. They are first-class dataset fields
/// there and must not be pushed into `extras`.
pub const SITE_PACKAGE_KEYS: &[&str] = &[
    "accessRights",
    "accrualPeriodicity",
    "id_dds",
    "id_indikator_mms",
    "id_sds",
    "jenis",
    "satuan",
    "ukuran",
    "prioritas_tahun",
    "publisher_type",
    "theme",
    "publishing_status",
    "id_msind",
    "id_mskeg",
    "apakah_indikator_komposit",
    "indikator_prioritas",
    "interpretasi",
    "variabel_disaggregasi",
    "kodereferensi",
    "kriteria_prioritas",
    "level_estimasi",
    "metode_perhitungan",
    "rumus",
    "id_kegiatan_mms",
    "id_kegiatan",
    "judul_kegiatan",
    "tahun_kegiatan",
    "jenis_statistik",
    "cara_pengumpulan_data",
    "sektor_kegiatan",
    "identitas_rekomendasi",
    "i_instansi_penyelanggara",
    "i_alamat",
    "i_telepon",
    "i_email",
    "i_faksimile",
    "ii_unit_eselon1",
    "ii_unit_eselon2",
    "ii_pj_nama",
    "ii_pj_jabatan",
    "ii_pj_alamat",
    "ii_pj_telepon",
    "ii_pj_email",
    "ii_pj_faksimile",
    "iii_latar_belakang_kegiatan",
    "iii_tujuan_kegiatan",
    "iv_kegiatan_ini_dilakukan",
    "iv_frekuensi_penyelanggara",
    "iv_tipe_pengumpulan_data",
    "iv_cakupan_wilayah_pengumpulan_data",
    "iv_metode_pengumpulan_data",
    "iv_sarana_pengumpulan_data",
    "iv_unit_pengumpulan_data",
    "v_jenis_rancangan_sampel",
    "v_metode_pemilihan_sampel_tahap_terakhir",
    "v_metode_yang_digunakan",
    "v_kerangka_sampel_tahap_terakhir",
    "v_fraksi_sampel_keseluruhan",
    "v_nilai_perkiraan_sampling_error_variabel_utama",
    "v_unit_sampel",
    "v_unit_observasi",
    "vi_apakah_melakukan_uji_coba",
    "vi_metode_pemeriksaan_kualitas_pengumpulan_data",
    "vi_apakah_melakukan_penyesuaian_nonrespon",
    "vi_petugas_pengumpulan_data",
    "vi_persyaratan_pendidikan_terendah_petugas_pengumpulan_data",
    "vi_jumlah_petugas_supervisor",
    "vi_jumlah_petugas_enumerator",
    "vi_apakah_melakukan_pelatihan_petugas",
    "vii_tahapan_pengolahan_data",
    "vii_metode_analisis",
    "vii_unit_analisis",
    "vii_tingkat_penyajian_hasil_analisis",
    "viii_ketersediaan_produk_tercetak",
    "viii_ketersediaan_produk_digital",
    "viii_ketersediaan_produk_mikrodata",
    "produsen_data_name",
    "produsen_data_province_code",
    "produsen_data_city_code",
    "total_msvar",
    "total_msind",
    "submission_period",
];

/// Fields never moved into `extras`, even when unrecognized.
pub const EXCLUDED_PACKAGE_KEYS: &[&str] = &["extras"];

/// Whether `key` is a native CKAN package field, including site fields.
pub fn is_known_package_key(key: &str) -> bool {
    CKAN_PACKAGE_KEYS.contains(&key) || SITE_PACKAGE_KEYS.contains(&key)
}

/// Whether `key` must stay at the top level of the package regardless of
/// whether it is recognized.
pub fn is_excluded_package_key(key: &str) -> bool {
    EXCLUDED_PACKAGE_KEYS.contains(&key)
}
