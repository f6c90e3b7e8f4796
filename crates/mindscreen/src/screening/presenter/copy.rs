use super::{ClosingNote, FormCopy, ResultCopy};

pub(super) static FORM_ID: FormCopy = FormCopy {
    title: "🧠 Prediksi Risiko Depresi Mahasiswa",
    description: "Isi formulir di bawah untuk memprediksi apakah anda berpotensi mengalami depresi.",
    submit_label: "Prediksi",
    prompts: [
        "Jenis Kelamin",
        "Usia",
        "Seberapa Besar Tekanan Akademik Yang Anda Rasakan",
        "Seberapa Puas Kepuasan Belajar Anda Dalam Belajar",
        "Berapa Durasi Tidur Anda Dalam Sehari",
        "Bagaimana Pola Makan Anda Sehari Hari",
        "Pernahkah Anda Berpikir Untuk Bunuh Diri?",
        "Seberapa Lama Anda Belajar Dalam Satu Hari",
        "Seberapa Besar Stres Finansial Anda",
        "Apakah Ada Riwayat Gangguan Mental Dalam Keluarga Anda",
    ],
    disclaimer: &[
        "Prediksi ini bukan pengganti diagnosis profesional. Hasil yang ditampilkan hanya bersifat estimasi berdasarkan data input yang diberikan.",
        "Jangan ragu untuk mencari bantuan profesional seperti psikolog kampus, konselor, atau layanan kesehatan mental lainnya.",
        "Gunakan aplikasi ini sebagai langkah awal untuk mengenali, memahami, dan menjaga kesehatan mentalmu!",
    ],
};

pub(super) static FORM_EN: FormCopy = FormCopy {
    title: "🧠 Student Depression Risk Prediction",
    description: "Fill out the form below to predict whether you are at risk of depression.",
    submit_label: "Predict",
    prompts: [
        "Gender",
        "Age",
        "How Much Academic Pressure Do You Feel?",
        "How Satisfied Are You With Your Studies?",
        "How Long Do You Sleep Daily?",
        "What Is Your Daily Dietary Habit?",
        "Have You Ever Had Suicidal Thoughts?",
        "How Many Hours Do You Study Daily?",
        "How Much Financial Stress Do You Experience?",
        "Is There a Family History of Mental Illness?",
    ],
    disclaimer: &[
        "This prediction is not a substitute for professional diagnosis. The results shown are only estimates based on your input.",
        "Do not hesitate to seek professional help such as campus psychologists, counselors, or mental health services.",
        "Use this app as a first step to recognize, understand, and maintain your mental health!",
    ],
};

pub(super) static INDICATED_ID: ResultCopy = ResultCopy {
    toast: "🚨 Prediksi: Mahasiswa ini berisiko mengalami depresi.",
    headline: "🚨 Hasil Prediksi: Mahasiswa ini berisiko mengalami depresi.",
    recommendations_title: "💡 Rekomendasi Langkah Selanjutnya",
    recommendations: &[
        "🧠 Cari bantuan profesional: Konsultasi dengan psikolog/psikiater sangat dianjurkan.",
        "🤝 Buka diri: Bicarakan perasaan Anda dengan teman, keluarga, atau mentor yang dapat Anda percaya.",
        "🧘 Coba teknik relaksasi: Meditasi 5 menit/hari, pernapasan dalam, atau olahraga ringan.",
        "🎶 Musik penyemangat: Dengarkan musik positif untuk mengubah suasana hati.",
    ],
    motivation: "💬 Motivasi: “Setiap badai pasti berlalu. Bantuan selalu ada jika kita mau mencarinya.”",
    follow_up_title: "📞 Layanan Konsultasi & Bantuan",
    follow_up: &[
        "Yayasan Pulih – Kontak admin kami melalui WA: +62 811 843 6633 (Chat only)",
        "SEJIWA Kemensos – Layanan dukungan psikososial gratis: 119 ext. 8",
        "Halo Kemenkes – Call Center 24 jam: 1500-567",
    ],
    closing: Some(ClosingNote {
        title: "✨ Ingat",
        text: "Kamu tidak sendirian. Ada banyak orang yang peduli dan siap membantu.",
    }),
};

pub(super) static INDICATED_EN: ResultCopy = ResultCopy {
    toast: "🚨 Prediction: This student is likely experiencing depression.",
    headline: "🚨 Prediction Result: This student is likely experiencing depression.",
    recommendations_title: "💡 Recommended Next Steps",
    recommendations: &[
        "🧠 Seek professional help: Consult a psychologist or psychiatrist as soon as possible.",
        "🤝 Open up: Share your feelings with trusted friends, family, or a mentor.",
        "🧘 Try relaxation techniques: Meditate for 5 minutes a day, deep breathing, or light exercise.",
        "🎶 Listen to uplifting music: Music can help shift your mood positively.",
    ],
    motivation: "💬 Motivation: “Every storm passes. Help is always there when you're willing to seek it.”",
    follow_up_title: "📞 Support & Helpline (Indonesia)",
    follow_up: &[
        "Pulih Foundation – WhatsApp: +62 811 843 6633 (Chat only)",
        "SEJIWA by Ministry of Social Affairs – Free psychosocial support: 119 ext. 8",
        "Halo Kemenkes – 24/7 Call Center: 1500-567",
    ],
    closing: Some(ClosingNote {
        title: "✨ Remember",
        text: "You are not alone. There are people who care and want to help you.",
    }),
};

pub(super) static NOT_INDICATED_ID: ResultCopy = ResultCopy {
    toast: "✅ Prediksi: Mahasiswa ini tidak menunjukkan indikasi depresi.",
    headline: "✅ Hasil Prediksi: Mahasiswa ini tidak menunjukkan indikasi depresi.",
    recommendations_title: "🎯 Rekomendasi Gaya Hidup Sehat",
    recommendations: &[
        "😴 Tidur cukup: Usahakan 7-8 jam/hari untuk kesehatan mental.",
        "🏃 Olahraga ringan: 15-30 menit per hari untuk mengurangi stres.",
        "📚 Manajemen waktu belajar: Jangan terlalu memaksakan diri, gunakan teknik Pomodoro.",
        "👥 Sosialisasi: Berkumpul dengan teman/keluarga untuk menjaga mood positif.",
        "🎨 Aktivitas kreatif: Melukis, menulis, atau mendengarkan musik bisa menjadi terapi.",
    ],
    motivation: "🌟 Motivasi: “Sehat mental adalah kunci produktivitas. Jaga dirimu, karena kamu berharga.”",
    follow_up_title: "📌 Aktivitas yang Disarankan",
    follow_up: &[
        "🧘 Meditasi atau yoga 10 menit sehari.",
        "📖 Membaca buku inspirasi atau mendengarkan podcast positif.",
        "☀️ Berjemur di pagi hari untuk vitamin D alami & mood booster.",
    ],
    closing: None,
};

pub(super) static NOT_INDICATED_EN: ResultCopy = ResultCopy {
    toast: "✅ Prediction: This student does not show signs of depression.",
    headline: "✅ Prediction Result: This student does not show signs of depression.",
    recommendations_title: "🎯 Healthy Lifestyle Recommendations",
    recommendations: &[
        "😴 Get enough sleep: Aim for 7–8 hours per day for better mental health.",
        "🏃 Exercise lightly: Do 15–30 minutes of light activity to reduce stress.",
        "📚 Manage study time: Don’t overwork; use techniques like Pomodoro.",
        "👥 Socialize: Spend time with friends or family to maintain a positive mood.",
        "🎨 Do creative things: Painting, journaling, or music can help you feel better.",
    ],
    motivation: "🌟 Motivation: “Mental wellness is key to productivity. Take care of yourself, because you're worth it.”",
    follow_up_title: "📌 Suggested Activities",
    follow_up: &[
        "🧘 Meditation or yoga for 10 minutes daily",
        "📖 Read inspiring books or listen to positive podcasts",
        "☀️ Get morning sun exposure for natural vitamin D & mood boost",
    ],
    closing: None,
};
